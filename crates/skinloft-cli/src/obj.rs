//! Wavefront OBJ output for lofted models.

use skinloft::LoftableModel;

/// Render every face of the model as OBJ `v`/`f` records.
///
/// Corners are written per face without vertex sharing; `f` indices are
/// 1-based as OBJ requires. Quads and triangles both come out as a single
/// `f` record, which any OBJ consumer handles.
pub fn write_obj(model: &LoftableModel<'_>) -> String {
    let mut out = String::new();
    let mut next_index = 1usize;

    for segment in model.segments() {
        for face in &segment.faces {
            for p in &face.points {
                out.push_str(&format!("v {} {} {}\n", p.x, p.y, p.z));
            }
            out.push('f');
            for i in 0..face.points.len() {
                out.push_str(&format!(" {}", next_index + i));
            }
            out.push('\n');
            next_index += face.points.len();
        }
    }

    out
}
