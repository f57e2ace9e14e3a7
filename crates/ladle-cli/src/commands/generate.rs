use super::Services;
use anyhow::Result;
use ladle_application::RecipeUsecase;
use ladle_core::generator::RecipeGenerator;
use ladle_interaction::GroqApiAgent;
use std::sync::Arc;

pub async fn run(services: &Services, dish: String, have: String) -> Result<()> {
    let mut agent = GroqApiAgent::try_from_env()?;
    if let Some(model) = &services.model_override {
        agent = agent.with_model(model.clone());
    }
    let generator: Arc<dyn RecipeGenerator> = Arc::new(agent);

    let usecase = RecipeUsecase::new(
        services.local.clone(),
        services.remote.clone(),
        generator,
        &services.context.user_code,
    );

    let request = usecase.build_request(dish, have);
    println!("🍲 Generating a recipe for \"{}\"...", request.dish);

    let content = usecase.generate(&request).await?;

    println!("\n{}\n", content);
    Ok(())
}
