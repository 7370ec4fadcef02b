use crate::playfield::Playfield;
use crate::square::Square;
use crate::world::GameWorld;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Convert a square from world space to a screen-space rectangle.
///
/// World space is centered on the playfield with +y up; screen space has
/// its origin at the top-left with +y down. The square's world position is
/// its center, the returned rect is its top-left corner plus size.
pub fn world_to_screen(square: &Square, playfield: &Playfield) -> Rect {
    let left = square.x - square.size / 2.0 + playfield.width / 2.0;
    let top = playfield.height / 2.0 - (square.y + square.size / 2.0);

    Rect::new(
        left.round() as i32,
        top.round() as i32,
        square.size as u32,
        square.size as u32,
    )
}

/// Draw one frame: background, stacked squares, then the active square.
///
/// The caller presents the canvas afterwards.
pub fn render(canvas: &mut Canvas<Window>, world: &GameWorld) -> Result<(), String> {
    canvas.set_draw_color(world.background);
    canvas.clear();

    for square in &world.stacked_squares {
        draw_square(canvas, square, &world.playfield)?;
    }

    if let Some(square) = &world.active_square {
        draw_square(canvas, square, &world.playfield)?;
    }

    Ok(())
}

fn draw_square(
    canvas: &mut Canvas<Window>,
    square: &Square,
    playfield: &Playfield,
) -> Result<(), String> {
    canvas.set_draw_color(square.color);
    canvas
        .fill_rect(world_to_screen(square, playfield))
        .map_err(|e| e.to_string())
}
