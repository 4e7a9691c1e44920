use std::path::PathBuf;

use wavyte_curves::{PresetOpts, TransitionPreset};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let out_dir = PathBuf::from("target").join("demos").join("transitions");
    let opts = PresetOpts::new("assets/leading.mp4").trailing("assets/trailing.mp4");

    for &preset in TransitionPreset::all() {
        let timeline = preset.timeline(&opts)?;
        let path = out_dir.join(format!("{}.json", preset.name()));
        timeline.to_path(&path)?;

        let mid = timeline.duration_frames / 2 + 1;
        let state = timeline.resolve_frame(mid)?;
        let visible: Vec<_> = state
            .clips
            .iter()
            .map(|c| format!("{}@{} a={:.2}", c.id, c.local_frame, c.alpha))
            .collect();
        println!(
            "{:<18} {:>3} frames  frame {mid}: {}",
            preset.name(),
            timeline.duration_frames,
            visible.join(", ")
        );
    }

    eprintln!("wrote {}", out_dir.display());
    Ok(())
}
