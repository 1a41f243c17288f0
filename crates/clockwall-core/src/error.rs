//! Error types for surface creation and rendering.

/// Failure while creating the drawing surface. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// The backend could not create its window or terminal surface.
    #[error("could not create surface: {0}")]
    Surface(String),

    /// The requested surface has no drawable area.
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Failure while drawing a frame. Fatal to the render loop; never retried.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A primitive draw call was rejected by the backend.
    #[error("could not draw {primitive}: {message}")]
    Primitive {
        primitive: &'static str,
        message: String,
    },

    /// The surface could not be cleared.
    #[error("could not clear renderer: {0}")]
    Clear(String),

    /// The finished frame could not be presented.
    #[error("could not present frame: {0}")]
    Present(String),

    /// Waiting for the next frame failed while polling the surface.
    #[error("could not read surface events: {0}")]
    Events(String),

    /// Drawing a specific cell failed.
    #[error("could not draw clock at ({column}, {row}): {source}")]
    Cell {
        column: usize,
        row: usize,
        #[source]
        source: Box<RenderError>,
    },
}
