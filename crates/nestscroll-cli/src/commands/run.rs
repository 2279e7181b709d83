use anyhow::Result;
use tracing::info;

use nestscroll_core::{
    chain::scrollable_chain, AppConfig, EasingMethod, FrameDriver, ScrollEngine, ScrollHost,
};

use crate::TargetArgs;

pub async fn run(
    config: &AppConfig,
    args: &TargetArgs,
    easing: Option<String>,
    timeout: Option<f64>,
) -> Result<()> {
    let (mut scene, target) = super::load_target(args)?;
    let chain = scrollable_chain(&scene, &target);

    let mut overrides = super::overrides(args);
    if let Some(name) = easing {
        overrides = overrides.easing(EasingMethod::named(name));
    }
    if let Some(ms) = timeout {
        overrides = overrides.timeout_ms(ms);
    }

    let mut engine = ScrollEngine::new(config.scroll.clone());
    let session = engine.scroll_into_viewport(&mut scene, &target, &overrides)?;

    let driver = FrameDriver::from_config(&config.animation);
    let frames = driver.run(&mut engine, &mut scene).await?;
    info!(session = session.id(), frames, "Scroll finished");

    if chain.is_empty() {
        println!("'{}' has no scrollable ancestors, nothing scrolled.", args.target);
        return Ok(());
    }

    println!(
        "Scrolled '{}' into view ({} frames, {} writes):\n",
        args.target,
        frames,
        scene.writes()
    );
    for container in &chain {
        let offset = scene.scroll_offset(container);
        println!(
            "  {:<20} left={:>9.1}  top={:>9.1}",
            scene.id_of(container),
            offset.left,
            offset.top
        );
    }

    Ok(())
}
