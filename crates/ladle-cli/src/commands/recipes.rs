use super::Services;
use anyhow::Result;
use ladle_core::store::LocalStore;

pub fn run(services: &Services) -> Result<()> {
    let recipes = services.local.recipes();

    if recipes.is_empty() {
        println!("No saved recipes yet. Try: ladle generate \"tomato soup\"");
        return Ok(());
    }

    println!("Saved recipes ({}):", recipes.len());
    for (index, recipe) in recipes.iter().enumerate() {
        println!("  {}. {}", index + 1, recipe.title);
    }
    Ok(())
}
