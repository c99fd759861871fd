use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use folio_scene::cli::Cli;
use folio_scene::core::DisplayContext;
use folio_scene::frame::FixedRateFrames;
use folio_scene::scene::{EntityId, RenderFrame};
use folio_scene::scroll::{presets, MemoryHost, TargetRef};
use folio_scene::types::{
    mesh_instances, CameraUniform, LightsUniform, ParticleUniform, StarUniform,
};
use folio_scene::{mount, SceneConfig, SceneHandle};

// === Demo page layout ===

const SECTIONS: [&str; 5] = ["about", "experience", "projects", "skills", "contact"];
const CARDS_PER_SECTION: [usize; 5] = [0, 2, 4, 3, 0];
const CARD_SPACING: f32 = 320.0;

#[derive(Serialize)]
struct Dump<'a> {
    frame: &'a RenderFrame,
    elements: &'a MemoryHost,
}

/// Element ids of the demo page, hero content first
fn page_elements() -> Vec<String> {
    let hero = [presets::HERO_TITLE, presets::HERO_SUBTITLE, presets::CTA_BUTTON].map(String::from);
    let titles = SECTIONS.iter().map(|s| format!("{s}-title"));
    let cards = SECTIONS
        .iter()
        .zip(CARDS_PER_SECTION)
        .flat_map(|(s, n)| (0..n).map(move |i| format!("{s}-card-{i}")));

    hero.into_iter().chain(titles).chain(cards).collect()
}

/// Bind section titles and every card; card tilt parity runs across the whole page
fn register_sections(handle: &mut SceneHandle, host: &mut MemoryHost, viewport_height: f32) {
    let mut card_index = 0;

    for (section_index, (section, cards)) in SECTIONS.iter().zip(CARDS_PER_SECTION).enumerate() {
        let section_top = viewport_height * (section_index + 1) as f32;

        let (start, end) =
            presets::trigger_range(section_top, viewport_height, presets::SECTION_TRIGGER);
        let title = presets::section_title(format!("{section}-title"), start, end);
        if let Err(e) = handle.register_binding(host, title) {
            log::warn!("section `{section}` not animated: {e}");
        }

        let specs: Vec<_> = (0..cards)
            .map(|i| {
                let card_top = section_top + 120.0 + i as f32 * CARD_SPACING;
                let (start, end) =
                    presets::trigger_range(card_top, viewport_height, presets::CARD_TRIGGER);
                let target = TargetRef::new(format!("{section}-card-{i}"));
                let spec = presets::card(target, card_index, start, end);
                card_index += 1;
                spec
            })
            .collect();
        handle.register_group(host, specs);
    }

    log::info!("{} scroll bindings registered", handle.scroll().len());
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene config {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let (width, height) = cli.size;
    let mut host = MemoryHost::with_elements(page_elements());
    let mut handle = mount(DisplayContext::new(width, height), &config, &mut host);
    register_sections(&mut handle, &mut host, height as f32);

    let loads = handle.scene().resources().into_iter().map(futures::future::ready);
    pollster::block_on(handle.load_resources(loads));

    if cli.hover {
        handle.on_pointer_enter(EntityId::LOGO);
    }

    let mut last = RenderFrame::Loading { progress: 0.0 };
    let last_index = cli.frames.saturating_sub(1).max(1) as f32;
    for frame in FixedRateFrames::new(cli.hz).take(cli.frames as usize) {
        let scroll = cli.scroll_to * (frame.number as f32 / last_index).min(1.0);
        handle.on_scroll(scroll, &mut host);
        last = handle.frame(frame.delta, &mut host);
    }

    if let Some(snapshot) = last.snapshot() {
        let instances = mesh_instances(snapshot);
        let camera = CameraUniform::from_camera(handle.scene().camera(), snapshot.time);
        let particles = ParticleUniform::new(&snapshot.particles);
        let lights = LightsUniform::new(&snapshot.lighting);
        let stars = StarUniform::new(&snapshot.stars);
        let bytes = bytemuck::cast_slice::<_, u8>(instances.as_slice()).len()
            + bytemuck::bytes_of(&camera).len()
            + bytemuck::bytes_of(&particles).len()
            + bytemuck::bytes_of(&lights).len()
            + bytemuck::bytes_of(&stars).len();

        log::info!(
            "t={:.2}s: {} mesh instances, particle spin {:.3} rad, {} bytes of GPU data",
            snapshot.time,
            instances.len(),
            snapshot.particles.rotation,
            bytes
        );
    } else {
        log::warn!("scene never became ready");
    }
    log::info!("intro complete: {}", handle.intro().is_complete());

    if let Some(path) = &cli.dump {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &Dump { frame: &last, elements: &host })
            .context("writing snapshot")?;
        log::info!("snapshot written to {}", path.display());
    }

    handle.dispose();
    Ok(())
}
