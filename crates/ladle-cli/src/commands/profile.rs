use super::Services;
use anyhow::Result;

pub fn show(services: &Services) -> Result<()> {
    let profile = services.profile.profile();

    println!("User code: {}", services.context.user_code);
    println!("Diet:      {}", display(&profile.diet));
    println!("Allergies: {}", display(&profile.allergies));
    Ok(())
}

pub async fn set(services: &Services, diet: &str, allergies: &str) -> Result<()> {
    let pushed = services.profile.save(diet, allergies).await;

    if pushed {
        println!("✅ Profile saved locally and synced to the remote store.");
    } else {
        println!("⚠️  Profile saved locally; remote sync was not confirmed.");
    }
    Ok(())
}

fn display(value: &str) -> &str {
    if value.is_empty() { "(not set)" } else { value }
}
