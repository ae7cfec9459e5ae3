use anyhow::Result;
use log::info;
use trackzone::examples::BoxGen;
use trackzone::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let zone = Rect::new(Vector::new(100.0, 80.0), 200.0, 120.0);
    let gate = Vector::new(300.0, 140.0);

    let mut detections = BoxGen::new(20.0, 100.0, 30.0, 20.0, Vector::new(6.0, 0.5), 2.0);
    let mut filter = VectorMovingAverageFilter::new(5)?;
    let mut log = AnnotationLog::default();
    let style = DrawStyle::default();

    let mut previous: Option<Vector> = None;
    for frame in 0..60 {
        let Some(observed) = detections.next() else {
            break;
        };
        let smoothed = filter.smoothen_value(observed.centroid());
        let inside = Rect::is_rect_within_rect(&zone, &observed, Some(50.0))?;

        log.draw_rect(&zone, (255, 0, 0), 1);
        log.annotate(&observed, if inside { "in zone" } else { "outside" }, &style);

        if let Some(prev) = previous {
            log.draw_line(&prev, &smoothed, (0, 0, 255), 1);
            let heading = smoothed.subtract(prev);
            if !heading.is_zero() {
                let bearing = heading.angle_between(gate.subtract(smoothed));
                info!(
                    "frame {:>2}: centroid {:?}, speed {:.2}, off gate {:?}",
                    frame,
                    smoothed,
                    heading.magnitude(),
                    bearing.ok()
                );
            }
        }
        previous = Some(smoothed);

        let commands = log.take();
        println!("frame {:>2}: inside={:<5} commands={}", frame, inside, commands.len());
    }

    Ok(())
}
