use anyhow::Result;
use serde::Serialize;

use nestscroll_core::{plan_scroll, AppConfig};

use crate::TargetArgs;

#[derive(Serialize)]
struct TaskRow<'a> {
    container: &'a str,
    delta_x: f64,
    delta_y: f64,
}

pub fn run(config: &AppConfig, args: &TargetArgs, json: bool) -> Result<()> {
    let (scene, target) = super::load_target(args)?;
    let options = config.scroll.merge(&super::overrides(args));

    let tasks = plan_scroll(&scene, &target, options.align, options.force);
    let rows: Vec<TaskRow> = tasks
        .iter()
        .map(|task| TaskRow {
            container: scene.id_of(&task.container),
            delta_x: task.delta_x,
            delta_y: task.delta_y,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("'{}' has no scrollable ancestors, nothing to do.", args.target);
        return Ok(());
    }

    println!("Scroll plan for '{}' ({} containers):\n", args.target, rows.len());
    for row in &rows {
        println!("  {:<20} dx={:>9.1}  dy={:>9.1}", row.container, row.delta_x, row.delta_y);
    }

    Ok(())
}
