pub mod plan;
pub mod run;

use anyhow::{Context, Result};

use nestscroll_core::{Alignment, Scene, SceneNode, ScrollOverrides};

use crate::TargetArgs;

/// Load the scene and resolve the target node
fn load_target(args: &TargetArgs) -> Result<(Scene, SceneNode)> {
    let scene = Scene::load(&args.scene)
        .with_context(|| format!("Failed to load scene {}", args.scene.display()))?;
    let target = scene.node(&args.target)?;
    Ok((scene, target))
}

/// Overrides given on the command line; unset flags keep the configured defaults
fn overrides(args: &TargetArgs) -> ScrollOverrides {
    let mut overrides = ScrollOverrides::new();
    if let Some(align) = &args.align {
        overrides.align = Some(Alignment::parse(align));
    }
    if args.force {
        overrides.force = Some(true);
    }
    overrides
}
