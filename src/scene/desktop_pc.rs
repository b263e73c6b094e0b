use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::topology::PartId;

use super::{Scene, SceneBuilder};

/// Name of the single object in [`Scene::desktop_pc`].
pub const DESKTOP_PC: &str = "PC de Escritorio";

impl Scene {
    /// Builds the fixed desktop computer scene.
    ///
    /// One object holding three parts: a monitor (screen, stand and base
    /// folded into a single part), a keyboard and a tower case.
    ///
    /// # Errors
    ///
    /// Returns an error only if scene assembly is broken; the layout itself
    /// is constant.
    pub fn desktop_pc() -> Result<Self> {
        let mut builder = SceneBuilder::new();

        let monitor = build_monitor(&mut builder, Point3::new(0.0, 0.5, 0.0))?;
        let keyboard = builder.add_box(
            "Teclado",
            Point3::new(0.0, -0.3, 0.5),
            Vector3::new(1.2, 0.05, 0.4),
        )?;
        let case = builder.add_box(
            "Case",
            Point3::new(1.3, 0.1, -0.1),
            Vector3::new(0.4, 0.9, 0.45),
        )?;

        builder.add_object(DESKTOP_PC, vec![monitor, keyboard, case])?;
        Ok(builder.build())
    }
}

/// Screen, stand and base stacked around `center`, merged into one part.
fn build_monitor(builder: &mut SceneBuilder, center: Point3) -> Result<PartId> {
    let screen = builder.add_box(
        "Pantalla",
        center + Vector3::new(0.0, 0.4, 0.0),
        Vector3::new(1.6, 1.0, 0.05),
    )?;
    let stand = builder.add_box(
        "Soporte",
        center + Vector3::new(0.0, -0.05, -0.05),
        Vector3::new(0.1, 0.3, 0.1),
    )?;
    let base = builder.add_box(
        "Base",
        center + Vector3::new(0.0, -0.25, 0.0),
        Vector3::new(0.6, 0.05, 0.3),
    )?;
    builder.merge_parts("Monitor", vec![screen, stand, base])
}
