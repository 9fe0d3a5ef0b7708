// Render a scene to an image file.
// Run with: cargo run --release --bin pinray -- [output.ppm|output.png] [scene.json]

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use pinray_core::{load_scene, Scene};
use pinray_renderer::{render, save_image, Camera, HittableList, RenderConfig};

const DEFAULT_OUTPUT: &str = "img.ppm";

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Usage,
    Render {
        output: PathBuf,
        scene: Option<PathBuf>,
    },
}

/// Interpret the arguments after the program name.
fn parse_args(args: &[String]) -> Command {
    if args.iter().any(|a| a == "-h" || a == "--help") {
        return Command::Help;
    }
    if args.len() > 2 {
        return Command::Usage;
    }

    Command::Render {
        output: PathBuf::from(args.first().map(String::as_str).unwrap_or(DEFAULT_OUTPUT)),
        scene: args.get(1).map(PathBuf::from),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("pinray");
    let usage = format!("Usage: {} [OUTPUT] [SCENE_JSON]", program);

    let (output, scene_path) = match parse_args(args.get(1..).unwrap_or(&[])) {
        Command::Help => {
            println!("{}", usage);
            return Ok(());
        }
        Command::Usage => {
            eprintln!("{}", usage);
            std::process::exit(1);
        }
        Command::Render { output, scene } => (output, scene),
    };

    let scene = match scene_path {
        Some(path) => {
            load_scene(&path).with_context(|| format!("loading scene {}", path.display()))?
        }
        None => {
            log::info!("No scene given, using the built-in reference scene");
            Scene::reference()
        }
    };

    let start = Instant::now();
    let world = HittableList::from_scene(&scene).context("building scene geometry")?;
    log::info!("Scene built in {:?}: {} objects", start.elapsed(), world.len());

    let camera = Camera::from_settings(&scene.camera);
    let image = render(&camera, &world, &RenderConfig::default()).context("rendering")?;

    save_image(&image, &output).with_context(|| format!("saving {}", output.display()))?;

    Ok(())
}
