use anyhow::Result;
use log::info;
use trackzone::prelude::*;

const WIDTH: usize = 64;
const HEIGHT: usize = 48;

/// Grey scene with a bright square sliding left to right
fn synthetic_video(frames: usize) -> Result<FrameSequence> {
    let object = Rect::new(Vector::new(0.0, 16.0), 12.0, 12.0);
    let frames = (0..frames)
        .map(|i| {
            let shifted = Rect::new(
                object.position().add(Vector::new(i as f32 * 2.0, 0.0)),
                object.width(),
                object.height(),
            );
            let data = (0..HEIGHT)
                .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
                .map(|(x, y)| {
                    let p = Vector::new(x as f32, y as f32);
                    if Rect::is_point_within_rect(&p, &shifted) {
                        240
                    } else {
                        90
                    }
                })
                .collect::<Vec<u8>>();
            Frame::from_raw(WIDTH, HEIGHT, 1, data)
        })
        .collect::<Result<Vec<_>>>()?;
    FrameSequence::new(frames, 25.0)
}

fn main() -> Result<()> {
    env_logger::init();

    let mut video = synthetic_video(26)?;
    let meta = video.metadata();
    info!(
        "{}x{} @ {} fps, {} frames, {} s",
        meta.frame_width,
        meta.frame_height,
        meta.frame_rate,
        meta.frame_count,
        meta.duration_secs()
    );

    let background = median_frame(&mut video, &BackgroundOptions::default().seed(1))?;
    let current = video.read_frame(meta.frame_count / 2)?;
    let diff = subtract_background(&background, &current)?;

    let changed = diff.data().iter().filter(|p| **p > 50).count();
    println!(
        "{} of {} pixels differ from the background",
        changed,
        diff.data().len()
    );

    Ok(())
}
