use crate::{ScreenSize, Viewport, ZoomDirection};

/// Input that the viewers react to, independent of the windowing library.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Close,
    /// Vertical wheel movement; positive means away from the user.
    Scroll { delta: f64 },
    PrimaryPressed,
    PrimaryReleased,
    SecondaryPressed,
    CursorMoved { position: (f64, f64) },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerState {
    Idle,
    /// Dragging; `last` is the pointer position the next delta is measured from.
    Panning { last: Option<(f64, f64)> },
}

/// What the event loop has to do after an event was handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Unchanged,
    ViewportChanged,
    Exit,
}

/// Owns the viewport and drives it from input events.
pub struct Controller {
    viewport: Viewport,
    screen: ScreenSize,
    pointer: PointerState,
    cursor: Option<(f64, f64)>,
}

impl Controller {
    pub fn new(screen: ScreenSize) -> Self {
        Self {
            viewport: Viewport::default(),
            screen,
            pointer: PointerState::Idle,
            cursor: None,
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn resize(&mut self, screen: ScreenSize) {
        self.screen = screen;
    }

    pub fn handle(&mut self, event: InputEvent) -> Response {
        match event {
            InputEvent::Close => Response::Exit,
            InputEvent::Scroll { delta } => match ZoomDirection::from_scroll(delta) {
                Some(direction) => {
                    self.viewport.zoom(direction);
                    Response::ViewportChanged
                }
                None => Response::Unchanged,
            },
            InputEvent::PrimaryPressed => {
                self.pointer = PointerState::Panning { last: self.cursor };
                Response::Unchanged
            }
            InputEvent::PrimaryReleased => {
                self.pointer = PointerState::Idle;
                Response::Unchanged
            }
            InputEvent::SecondaryPressed => {
                self.viewport.reset();
                Response::ViewportChanged
            }
            InputEvent::CursorMoved { position } => {
                self.cursor = Some(position);
                match self.pointer {
                    PointerState::Idle => Response::Unchanged,
                    PointerState::Panning { last } => {
                        self.pointer = PointerState::Panning {
                            last: Some(position),
                        };
                        match last {
                            Some((x, y)) => {
                                self.viewport
                                    .pan((position.0 - x, position.1 - y), self.screen);
                                Response::ViewportChanged
                            }
                            None => Response::Unchanged,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(ScreenSize::new(600, 600))
    }

    fn moved(x: f64, y: f64) -> InputEvent {
        InputEvent::CursorMoved { position: (x, y) }
    }

    #[test]
    fn close_exits() {
        assert_eq!(controller().handle(InputEvent::Close), Response::Exit);
    }

    #[test]
    fn moving_without_a_press_does_not_pan() {
        let mut controller = controller();

        assert_eq!(controller.handle(moved(10.0, 10.0)), Response::Unchanged);
        assert_eq!(controller.handle(moved(90.0, 40.0)), Response::Unchanged);
        assert_eq!(*controller.viewport(), Viewport::DEFAULT);
    }

    #[test]
    fn drag_pans_by_delta_since_last_position() {
        let mut controller = controller();
        controller.handle(moved(100.0, 100.0));
        controller.handle(InputEvent::PrimaryPressed);
        assert_eq!(
            controller.pointer(),
            PointerState::Panning {
                last: Some((100.0, 100.0))
            }
        );

        assert_eq!(
            controller.handle(moved(160.0, 100.0)),
            Response::ViewportChanged
        );
        // 60 px of a 3.0 span over 600 px.
        assert!((controller.viewport().x_min - -2.3).abs() < 1e-12);

        controller.handle(moved(220.0, 100.0));
        assert!((controller.viewport().x_min - -2.6).abs() < 1e-12);

        controller.handle(InputEvent::PrimaryReleased);
        assert_eq!(controller.pointer(), PointerState::Idle);
        assert_eq!(controller.handle(moved(0.0, 0.0)), Response::Unchanged);
        assert!((controller.viewport().x_min - -2.6).abs() < 1e-12);
    }

    #[test]
    fn press_before_any_move_anchors_on_first_move() {
        let mut controller = controller();
        controller.handle(InputEvent::PrimaryPressed);

        assert_eq!(controller.handle(moved(300.0, 300.0)), Response::Unchanged);
        assert_eq!(*controller.viewport(), Viewport::DEFAULT);
        assert_eq!(
            controller.handle(moved(300.0, 360.0)),
            Response::ViewportChanged
        );
        assert!((controller.viewport().y_max - 1.8).abs() < 1e-12);
    }

    #[test]
    fn scroll_zooms_in_any_state() {
        let mut controller = controller();
        assert_eq!(
            controller.handle(InputEvent::Scroll { delta: 1.0 }),
            Response::ViewportChanged
        );
        assert!((controller.viewport().x_range() - 2.7).abs() < 1e-12);

        controller.handle(InputEvent::PrimaryPressed);
        controller.handle(InputEvent::Scroll { delta: -3.0 });
        assert!((controller.viewport().x_range() - 2.97).abs() < 1e-12);
        assert!(matches!(controller.pointer(), PointerState::Panning { .. }));
    }

    #[test]
    fn zero_scroll_is_ignored() {
        let mut controller = controller();

        assert_eq!(
            controller.handle(InputEvent::Scroll { delta: 0.0 }),
            Response::Unchanged
        );
        assert_eq!(*controller.viewport(), Viewport::DEFAULT);
    }

    #[test]
    fn secondary_press_resets() {
        let mut controller = controller();
        controller.handle(InputEvent::Scroll { delta: 1.0 });
        controller.handle(InputEvent::Scroll { delta: 1.0 });

        assert_eq!(
            controller.handle(InputEvent::SecondaryPressed),
            Response::ViewportChanged
        );
        assert_eq!(*controller.viewport(), Viewport::DEFAULT);
    }

    #[test]
    fn resize_changes_pan_scale() {
        let mut controller = controller();
        controller.resize(ScreenSize::new(1200, 1200));
        controller.handle(moved(0.0, 0.0));
        controller.handle(InputEvent::PrimaryPressed);
        controller.handle(moved(120.0, 0.0));

        assert!((controller.viewport().x_min - -2.3).abs() < 1e-12);
    }
}
