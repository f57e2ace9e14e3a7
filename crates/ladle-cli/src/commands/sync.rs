use super::Services;
use anyhow::Result;

pub async fn run(services: &Services) -> Result<()> {
    let outcome = services.sync.pull().await;

    if outcome.profile_updated {
        println!("✅ Profile updated from the remote store.");
    } else {
        println!("Profile unchanged (no remote profile found).");
    }
    println!("Recipes adopted from remote: {}", outcome.recipes_added);
    Ok(())
}
