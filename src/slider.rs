//! Before/after compare divider.
//!
//! Translates pointer drags into a clamped offset that is also the clip width
//! of the enhanced layer.

/// screen-space box the original and enhanced images are overlaid in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonFrame {
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl ComparisonFrame {
    /// create a frame; negative or NaN sizes collapse to zero
    pub fn new(left: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// offset of `x` from the left edge, clamped into [0, width]
    pub fn offset_for(&self, x: f32) -> f32 {
        (x - self.left).clamp(0.0, self.width)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

#[derive(Clone, Debug)]
pub struct CompareSlider {
    frame: ComparisonFrame,
    offset: f32,
    state: DragState,
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareSlider {
    pub fn new() -> Self {
        Self {
            frame: ComparisonFrame::new(0.0, 0.0, 0.0),
            offset: 0.0,
            state: DragState::Idle,
        }
    }

    pub fn frame(&self) -> ComparisonFrame {
        self.frame
    }

    /// replace the frame geometry
    /// the offset is kept (no reset between uploads) but clamped so it never exceeds the new width
    pub fn set_frame(&mut self, frame: ComparisonFrame) {
        self.frame = frame;
        self.offset = self.offset.clamp(0.0, frame.width);
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// visible width of the enhanced layer, always equal to the divider offset
    pub fn clip_width(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// pointer pressed on the divider handle
    pub fn pointer_down(&mut self) {
        self.state = DragState::Dragging;
    }

    /// pointer released anywhere
    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    /// pointer moved to horizontal coordinate `x`
    /// returns the new offset when dragging, None (and no change) when idle
    pub fn pointer_move(&mut self, x: f32) -> Option<f32> {
        if self.state != DragState::Dragging {
            return None;
        }
        self.offset = self.frame.offset_for(x);
        Some(self.offset)
    }

    pub fn apply(&mut self, event: SliderEvent) -> Option<f32> {
        match event {
            SliderEvent::Pressed => {
                self.pointer_down();
                None
            }
            SliderEvent::Moved { x } => self.pointer_move(x),
            SliderEvent::Released => {
                self.pointer_up();
                None
            }
        }
    }
}

/// pointer input relevant to the divider, in the order it happened within a frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// primary button went down on the handle
    Pressed,
    Moved { x: f32 },
    /// primary button released anywhere in the window
    Released,
}
