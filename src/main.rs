use std::sync::Arc;

use fan_profile::config::SessionConfig;
use fan_profile::profile::{EsportsPlatform, FileRef, SocialPlatform};
use fan_profile::session::OnboardingSession;
use fan_profile::upload::DocumentSlot;
use fan_profile::verify::SimulatedVerifier;

/// Scripted demo: walks one fan through the full wizard against the
/// simulated verification service and prints the resulting metrics.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    eprintln!("🎮 Fan Profile demo v{}\n", env!("CARGO_PKG_VERSION"));

    let config = SessionConfig::default();
    let session = OnboardingSession::new(Arc::new(SimulatedVerifier::new(config.clone())), config);

    // Step 1 — basic info
    session
        .edit_basic_info(|info| {
            info.name = "Ana Souza".to_string();
            info.email = "ana@example.com".to_string();
            info.national_id = "123.456.789-00".to_string();
            info.address = "Rua 1, 100".to_string();
            info.city = "São Paulo".to_string();
            info.state = "SP".to_string();
        })
        .await;
    session.try_advance().await.map_err(|e| format!("{e:?}"))?;

    // Step 2 — interests
    session
        .edit_interests(|interests| {
            interests.add_favorite_game("Counter-Strike 2");
            interests.add_favorite_game("Valorant");
            interests.add_favorite_team("FURIA");
            interests.add_attended_event("Major 2025");
            interests.purchased_merchandise = true;
            interests.purchase_details = Some("Team jersey".to_string());
        })
        .await;
    session.try_advance().await.map_err(|e| format!("{e:?}"))?;

    // Step 3 — documents (upload, then wait for verification)
    session
        .attach_document(
            DocumentSlot::IdDocument,
            FileRef {
                display_name: "id.jpg".to_string(),
                mime_type: "image/jpeg".to_string(),
                size_bytes: 812_331,
            },
        )
        .await?;
    session
        .attach_document(
            DocumentSlot::Selfie,
            FileRef {
                display_name: "selfie.png".to_string(),
                mime_type: "image/png".to_string(),
                size_bytes: 1_204_776,
            },
        )
        .await?;
    let verdict = session.request_document_verification().await?;
    eprintln!("   documents: {}", verdict.message);
    session.try_advance().await.map_err(|e| format!("{e:?}"))?;

    // Step 4 — social accounts
    let account = session
        .connect_social(SocialPlatform::Twitter, "ana_gg")
        .await?;
    eprintln!(
        "   @{} connected, relevance {}%",
        account.username,
        account.relevance_score.unwrap_or(0)
    );
    session.try_advance().await.map_err(|e| format!("{e:?}"))?;

    // Step 5 — esports profiles
    let profile = session
        .validate_esports(EsportsPlatform::Faceit, "https://faceit.com/ana")
        .await?;
    eprintln!(
        "   {} profile validated, relevance {}%",
        profile.platform,
        profile.relevance_score.unwrap_or(0)
    );
    session.try_advance().await.map_err(|e| format!("{e:?}"))?;

    // Step 6 — summary
    let summary = session.summary().await;
    println!("\nProfile completeness: {}%", summary.completeness);
    println!("Fan score: {} ({})", summary.fan_score, summary.tier);

    Ok(())
}
