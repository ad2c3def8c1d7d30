use crate::Point;
use smallvec::{smallvec, SmallVec};

/// The button that started a pointer gesture. Every button moves [tiles](crate::Tile).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    /// The primary button.
    Left,
    /// The wheel button.
    Middle,
    /// The secondary button.
    Right,
    /// Any other button, by its platform code.
    Other(u16),
}

/// One input event from the external event source, in window pixels with the origin at the
/// bottom left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// A button went down.
    Press {
        /// Horizontal pointer position.
        x: f32,
        /// Vertical pointer position.
        y: f32,
        /// The button pressed.
        button: MouseButton,
    },
    /// The pointer moved while a button was down.
    Drag {
        /// Horizontal pointer position after the move.
        x: f32,
        /// Vertical pointer position after the move.
        y: f32,
        /// Horizontal distance moved since the previous event.
        dx: f32,
        /// Vertical distance moved since the previous event.
        dy: f32,
        /// The button held down.
        button: MouseButton,
    },
    /// A button went up.
    Release {
        /// Horizontal pointer position.
        x: f32,
        /// Vertical pointer position.
        y: f32,
        /// The button released.
        button: MouseButton,
    },
}

impl PointerEvent {
    /// Which kind of event this is.
    pub fn kind(&self) -> PointerEventKind {
        match self {
            PointerEvent::Press { .. } => PointerEventKind::Press,
            PointerEvent::Drag { .. } => PointerEventKind::Drag,
            PointerEvent::Release { .. } => PointerEventKind::Release,
        }
    }

    /// Where the pointer is.
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Press { x, y, .. }
            | PointerEvent::Drag { x, y, .. }
            | PointerEvent::Release { x, y, .. } => Point::new(x, y),
        }
    }

    /// The button involved.
    pub fn button(&self) -> MouseButton {
        match *self {
            PointerEvent::Press { button, .. }
            | PointerEvent::Drag { button, .. }
            | PointerEvent::Release { button, .. } => button,
        }
    }
}

/// A [pointer event](PointerEvent) without its data.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PointerEventKind {
    /// [PointerEvent::Press].
    Press,
    /// [PointerEvent::Drag].
    Drag,
    /// [PointerEvent::Release].
    Release,
}

/// A part of the [session](crate::GameSession) that handles [pointer events](PointerEvent).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Component {
    /// The [hand](crate::Hand): selection, highlighting, and moving the held
    /// [tile](crate::Tile).
    Hand,
    /// The [board](crate::BoardGrid): hit testing cells and checking that at most one is
    /// selected on release.
    Board,
    /// The [placement rules](crate::TileInteraction): snapping, placing, and returning.
    Interaction,
}

/// The ordered [components](Component) interested in each [kind of event](PointerEventKind),
/// fixed when the [session](crate::GameSession) is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    press: SmallVec<[Component; 3]>,
    drag: SmallVec<[Component; 3]>,
    release: SmallVec<[Component; 3]>,
}

impl Default for DispatchTable {
    /// * Press: [Component::Hand].
    /// * Drag: [Component::Hand], [Component::Board], [Component::Interaction].
    /// * Release: [Component::Board], [Component::Hand], [Component::Interaction].
    fn default() -> DispatchTable {
        DispatchTable {
            press: smallvec![Component::Hand],
            drag: smallvec![Component::Hand, Component::Board, Component::Interaction],
            release: smallvec![Component::Board, Component::Hand, Component::Interaction],
        }
    }
}

impl DispatchTable {
    /// The [components](Component) that handle `kind`, in the order they run.
    pub fn components(&self, kind: PointerEventKind) -> &[Component] {
        match kind {
            PointerEventKind::Press => &self.press,
            PointerEventKind::Drag => &self.drag,
            PointerEventKind::Release => &self.release,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accessors() {
        let drag = PointerEvent::Drag {
            x: 3.0,
            y: 4.0,
            dx: 1.0,
            dy: -1.0,
            button: MouseButton::Right,
        };

        assert_eq!(PointerEventKind::Drag, drag.kind());
        assert_eq!(Point::new(3.0, 4.0), drag.position());
        assert_eq!(MouseButton::Right, drag.button());

        let release = PointerEvent::Release {
            x: 0.0,
            y: 1.0,
            button: MouseButton::Other(8),
        };

        assert_eq!(PointerEventKind::Release, release.kind());
        assert_eq!(MouseButton::Other(8), release.button());
    }

    #[test]
    fn default_table_order() {
        let table = DispatchTable::default();

        assert_eq!(&[Component::Hand], table.components(PointerEventKind::Press));
        assert_eq!(
            &[Component::Hand, Component::Board, Component::Interaction],
            table.components(PointerEventKind::Drag)
        );
        assert_eq!(
            &[Component::Board, Component::Hand, Component::Interaction],
            table.components(PointerEventKind::Release)
        );
    }
}
