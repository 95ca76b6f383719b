//! Gallows rendering: the static frame drawn at round start and the six
//! additive figure segments revealed one per wrong guess. Segments are an
//! ordered enum sequence keyed by the incorrect-guess count; drawing a stage
//! never erases earlier ones.

use web_sys::CanvasRenderingContext2d;

/// One segment of the hanged figure, in reveal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureStage {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl FigureStage {
    /// Reveal order, stage 1 through stage 6.
    pub const SEQUENCE: [FigureStage; 6] = [
        FigureStage::Head,
        FigureStage::Torso,
        FigureStage::LeftArm,
        FigureStage::RightArm,
        FigureStage::LeftLeg,
        FigureStage::RightLeg,
    ];

    /// Stage revealed by the `count`-th wrong guess (1..=6).
    pub fn for_count(count: u8) -> Option<FigureStage> {
        match count {
            1..=6 => Some(Self::SEQUENCE[count as usize - 1]),
            _ => None,
        }
    }
}

/// Clear the canvas and draw the empty gallows (base, post, beam, rope stub).
pub fn draw_frame(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_stroke_style_str("white");
    ctx.set_line_width(4.0);
    ctx.begin_path();
    ctx.move_to(50.0, 180.0);
    ctx.line_to(150.0, 180.0);
    ctx.line_to(100.0, 50.0);
    ctx.line_to(100.0, 70.0);
    ctx.stroke();
}

/// Draw one figure segment. Strictly additive over whatever is on the canvas.
pub fn draw_stage(ctx: &CanvasRenderingContext2d, stage: FigureStage) {
    match stage {
        FigureStage::Head => {
            ctx.begin_path();
            ctx.arc(100.0, 90.0, 20.0, 0.0, std::f64::consts::TAU).ok();
            ctx.stroke();
        }
        FigureStage::Torso => line(ctx, 100.0, 110.0, 100.0, 150.0),
        FigureStage::LeftArm => line(ctx, 100.0, 120.0, 70.0, 140.0),
        FigureStage::RightArm => line(ctx, 100.0, 120.0, 130.0, 140.0),
        FigureStage::LeftLeg => line(ctx, 100.0, 150.0, 70.0, 180.0),
        FigureStage::RightLeg => line(ctx, 100.0, 150.0, 130.0, 180.0),
    }
}

fn line(ctx: &CanvasRenderingContext2d, x1: f64, y1: f64, x2: f64, y2: f64) {
    ctx.begin_path();
    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    ctx.stroke();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_sequence_order() {
        assert_eq!(FigureStage::for_count(1), Some(FigureStage::Head));
        assert_eq!(FigureStage::for_count(2), Some(FigureStage::Torso));
        assert_eq!(FigureStage::for_count(3), Some(FigureStage::LeftArm));
        assert_eq!(FigureStage::for_count(4), Some(FigureStage::RightArm));
        assert_eq!(FigureStage::for_count(5), Some(FigureStage::LeftLeg));
        assert_eq!(FigureStage::for_count(6), Some(FigureStage::RightLeg));
    }

    #[test]
    fn test_stage_count_out_of_range() {
        assert_eq!(FigureStage::for_count(0), None);
        assert_eq!(FigureStage::for_count(7), None);
    }
}
