use image::{ImageBuffer, Rgba, RgbaImage};

/// Manifest background: the green used across the web UI (#16a34a).
pub const BACKGROUND: Rgba<u8> = Rgba([22, 163, 74, 255]);
/// Fill color for the heart shape.
pub const HEART_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);

// Heart outline as fractions of the canvas edge, starting at the bottom
// tip and going counter-clockwise. The polygon closes last-to-first.
const HEART: [(f32, f32); 6] = [
    (0.50, 0.75),
    (0.15, 0.45),
    (0.35, 0.15),
    (0.50, 0.35),
    (0.65, 0.15),
    (0.85, 0.45),
];

/// Returns the output file name for a given icon size, e.g. `icon-192x192.png`.
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// Renders a square manifest icon: solid background with a filled heart.
pub fn render_icon(size: u32) -> RgbaImage {
    let vertices: Vec<(f32, f32)> = HEART
        .iter()
        .map(|&(fx, fy)| (fx * size as f32, fy * size as f32))
        .collect();

    let mut image = ImageBuffer::new(size, size);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        // Sample at the pixel center
        if point_in_polygon(x as f32 + 0.5, y as f32 + 0.5, &vertices) {
            *pixel = HEART_FILL;
        } else {
            *pixel = BACKGROUND;
        }
    }
    image
}

/// Even-odd ray cast: a point is inside if a horizontal ray towards +x
/// crosses the polygon's edges an odd number of times.
fn point_in_polygon(px: f32, py: f32, vertices: &[(f32, f32)]) -> bool {
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let (xi, yi) = vertices[i];
        let (xj, yj) = vertices[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
