use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::anchor::anchored_rect;
use super::braille::BrailleCanvas;
use crate::config::DisplayConfig;
use crate::game::{Ball, GameState, Paddle};

/// Field units to Braille pixels
struct Scale {
    x: f32,
    y: f32,
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Draw the whole field (paddles, ball, centre line, score) into the frame
pub fn render(frame: &mut Frame, state: &GameState, display: &DisplayConfig) {
    let area = frame.area();
    let background = rgb(display.background_color);

    // Solid background (true RGB, not terminal default)
    frame.render_widget(Block::default().style(Style::default().bg(background)), area);

    if area.width == 0 || area.height == 0 {
        return;
    }

    // Braille canvas covers the whole frame; the field is stretched onto it
    let mut canvas = BrailleCanvas::new(area.width as usize, area.height as usize);
    let scale = Scale {
        x: canvas.pixel_width() as f32 / state.field_width,
        y: canvas.pixel_height() as f32 / state.field_height,
    };

    canvas.set_pen(rgb(display.center_line_color));
    draw_center_line(&mut canvas, state.field_width, &scale);

    canvas.set_pen(rgb(display.paddle_color));
    for paddle in &state.paddles {
        draw_paddle(&mut canvas, paddle, &scale);
    }

    canvas.set_pen(rgb(display.ball_color));
    draw_ball(&mut canvas, &state.ball, &scale);

    render_braille_canvas(frame, &canvas, area, background);

    draw_score(frame, state, display, area);
}

fn draw_paddle(canvas: &mut BrailleCanvas, paddle: &Paddle, scale: &Scale) {
    let pixel_x = (paddle.x * scale.x) as usize;
    let pixel_y = (paddle.y * scale.y) as usize;
    let pixel_width = ((paddle.width * scale.x).round() as usize).max(1);
    let pixel_height = ((paddle.height * scale.y).round() as usize).max(1);

    canvas.fill_rect(pixel_x, pixel_y, pixel_width, pixel_height);
}

fn draw_ball(canvas: &mut BrailleCanvas, ball: &Ball, scale: &Scale) {
    // Drawn as a circle centred on (x, y); collisions use their own window
    canvas.fill_ellipse(
        ball.x * scale.x,
        ball.y * scale.y,
        ball.radius * scale.x,
        ball.radius * scale.y,
    );
}

fn draw_center_line(canvas: &mut BrailleCanvas, field_width: f32, scale: &Scale) {
    let center_pixel_x = (field_width / 2.0 * scale.x) as usize;

    // Dotted: two pixels on, two off
    for y in (0..canvas.pixel_height()).step_by(4) {
        canvas.set_pixel(center_pixel_x, y);
        canvas.set_pixel(center_pixel_x, y + 1);
    }
}

fn render_braille_canvas(frame: &mut Frame, canvas: &BrailleCanvas, area: Rect, background: Color) {
    let lines: Vec<Line> = (0..canvas.height())
        .map(|y| {
            // Group runs of same-colored cells into spans
            let mut spans: Vec<Span> = Vec::new();
            let mut run = String::new();
            let mut run_color = canvas.color_at(0, y);

            for x in 0..canvas.width() {
                let color = canvas.color_at(x, y);
                if color != run_color && !run.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut run),
                        Style::default().fg(run_color),
                    ));
                }
                run_color = color;
                run.push(canvas.to_char(x, y));
            }
            spans.push(Span::styled(run, Style::default().fg(run_color)));

            Line::from(spans)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(background)),
        area,
    );
}

fn draw_score(frame: &mut Frame, state: &GameState, display: &DisplayConfig, area: Rect) {
    let text = state.score.scoreboard();
    let (field_x, field_y) = display.score_position();

    // Field position to terminal cell
    let cell_x = area
        .x
        .saturating_add((field_x / state.field_width * area.width as f32).max(0.0) as u16);
    let cell_y = area
        .y
        .saturating_add((field_y / state.field_height * area.height as f32).max(0.0) as u16);

    let rect = anchored_rect(
        display.score_anchor,
        cell_x,
        cell_y,
        text.chars().count() as u16,
        1,
        area,
    );

    let score = Paragraph::new(text).style(
        Style::default()
            .fg(rgb(display.score_color))
            .bg(rgb(display.background_color)),
    );
    frame.render_widget(score, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PhysicsConfig;
    use crate::game::Side;
    use crate::ui::Anchor;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(state: &GameState, display: &DisplayConfig) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| render(f, state, display)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    fn state() -> GameState {
        let mut rng = StdRng::seed_from_u64(1);
        GameState::new(800.0, 600.0, &PhysicsConfig::default(), &mut rng)
    }

    #[test]
    fn test_score_drawn_at_anchor() {
        let mut state = state();
        state.score.record_loss(Side::Right);
        let buffer = draw(&state, &DisplayConfig::default());
        let rows = rows(&buffer);

        // Centre anchor at field (400, 100) -> cell (40, 4)
        let line: String = rows[4].chars().skip(38).take(5).collect();
        assert_eq!(line, "1 : 0");

        // Top-left anchor at the field origin
        let display = DisplayConfig {
            score_anchor: Anchor::TopLeft,
            score_position: Some([0.0, 0.0]),
            ..DisplayConfig::default()
        };
        let rows = self::rows(&draw(&state, &display));
        assert!(rows[0].starts_with("1 : 0"), "{:?}", rows[0]);
    }

    #[test]
    fn test_far_score_position_in_offset_viewport() {
        let state = state();
        let display = DisplayConfig {
            score_anchor: Anchor::TopLeft,
            score_position: Some([1.0e9, 1.0e9]),
            ..DisplayConfig::default()
        };

        // Inline viewports start below row 0
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = Rect::new(0, 30, 80, 10);
                draw_score(f, &state, &display, area);
            })
            .unwrap();

        // Clamped to the bottom-right corner of the viewport
        let rows = rows(terminal.backend().buffer());
        assert!(rows[39].ends_with("0 : 0"), "{:?}", rows[39]);
    }

    #[test]
    fn test_paddles_drawn_in_paddle_color() {
        let display = DisplayConfig {
            paddle_color: [200, 10, 10],
            ..DisplayConfig::default()
        };
        let buffer = draw(&state(), &display);
        let width = buffer.area.width as usize;

        // Left paddle: field x 50..70 -> cell 5, y 200..400 -> rows 8..16
        let cell = &buffer.content()[12 * width + 5];
        assert_ne!(cell.symbol(), "\u{2800}");
        assert_eq!(cell.fg, Color::Rgb(200, 10, 10));

        // Right paddle: field x 740..760 -> cell 74
        let cell = &buffer.content()[12 * width + 74];
        assert_ne!(cell.symbol(), "\u{2800}");

        // Empty field stays blank with the background color
        let cell = &buffer.content()[20 * width + 20];
        assert_eq!(cell.symbol(), "\u{2800}");
        assert_eq!(cell.bg, Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_ball_drawn_at_position() {
        let mut state = state();
        state.ball.x = 200.0;
        state.ball.y = 450.0;
        let buffer = draw(&state, &DisplayConfig::default());
        let width = buffer.area.width as usize;

        // (200, 450) -> cell (20, 18)
        assert_ne!(buffer.content()[18 * width + 20].symbol(), "\u{2800}");
    }
}
