//! Figure / axis handles from whichever plotting backend draws.

/// The plotting backend's side of figure management.
pub trait Canvas {
    type Figure;
    type Axes;

    /// Create a fresh figure holding a single default axis.
    fn subplots(&mut self) -> (Self::Figure, Self::Axes);

    /// The figure an existing axis belongs to.
    fn figure_of(&self, axes: &Self::Axes) -> Self::Figure;
}

/// Reuse `axes` if given, otherwise start a new figure.
pub fn fig_ax<C: Canvas>(canvas: &mut C, axes: Option<C::Axes>) -> (C::Figure, C::Axes) {
    match axes {
        None => canvas.subplots(),
        Some(ax) => (canvas.figure_of(&ax), ax),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FigureId(pub usize);

/// Handle to one axis of a [`Sheet`] figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxesRef {
    pub figure: FigureId,
    pub slot: usize,
}

/// Bookkeeping-only canvas: hands out ids, draws nothing.
#[derive(Debug, Default)]
pub struct Sheet {
    axes_per_figure: Vec<usize>,
}

impl Sheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn figure_count(&self) -> usize {
        self.axes_per_figure.len()
    }

    /// Axes held by `figure`, `0` for an unknown id.
    #[must_use]
    pub fn axes_count(&self, figure: FigureId) -> usize {
        self.axes_per_figure.get(figure.0).copied().unwrap_or(0)
    }
}

impl Canvas for Sheet {
    type Figure = FigureId;
    type Axes = AxesRef;

    fn subplots(&mut self) -> (FigureId, AxesRef) {
        let figure = FigureId(self.axes_per_figure.len());
        self.axes_per_figure.push(1);
        (figure, AxesRef { figure, slot: 0 })
    }

    fn figure_of(&self, axes: &AxesRef) -> FigureId {
        axes.figure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_axes_creates_a_figure() {
        let mut sheet = Sheet::new();
        let (fig, ax) = fig_ax(&mut sheet, None);
        assert_eq!(fig, FigureId(0));
        assert_eq!(ax.figure, fig);
        assert_eq!(sheet.axes_count(fig), 1);

        let (second, _) = fig_ax(&mut sheet, None);
        assert_eq!(second, FigureId(1));
        assert_eq!(sheet.figure_count(), 2);
    }

    #[test]
    fn given_axes_resolve_to_their_figure() {
        let mut sheet = Sheet::new();
        let (fig, ax) = sheet.subplots();
        let (again, same) = fig_ax(&mut sheet, Some(ax));
        assert_eq!(again, fig);
        assert_eq!(same, ax);
        assert_eq!(sheet.figure_count(), 1);
    }
}
