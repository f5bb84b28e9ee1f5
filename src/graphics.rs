use drift::simulation::locatable::Locatable;
use drift::simulation::params::Params;
use drift::Vector;
use macroquad::prelude::*;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Vector {
    type Output = Vec2;

    // origin at the window center, y up, wrapped into the visible box
    fn to_screen(&self, params: &Params) -> Vec2 {
        let x = (self.x + params.box_width / 2.0).rem_euclid(params.box_width);
        let y = (self.y + params.box_height / 2.0).rem_euclid(params.box_height);
        let scale_x = screen_width() / params.box_width as f32;
        let scale_y = screen_height() / params.box_height as f32;
        vec2(
            x as f32 * scale_x,
            (params.box_height - y) as f32 * scale_y,
        )
    }
}

/// Draws each entity as an isosceles triangle whose apex points along its heading.
pub fn draw_entities<T: Locatable>(entities: &[T], params: &Params) {
    for entity in entities {
        let base_center = entity.position().to_screen(params);
        let heading = entity.heading() as f32;

        // screen y grows downwards
        let forward = vec2(heading.cos(), -heading.sin());
        let side = vec2(-forward.y, forward.x) * (params.triangle_base / 2.0);

        draw_triangle_lines(
            base_center + side,
            base_center + forward * params.triangle_height,
            base_center - side,
            1.5,
            DARKGRAY,
        );
    }
}
