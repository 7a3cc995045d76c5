// Play/pause state machine and the visibility of its two widgets.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Widget {
    Play,
    Pause,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Controls {
    state: PlaybackState,
    visible: Widget,
}

impl Default for Controls {
    // The page opens with the loop running but the play icon showing, so the
    // first click doubles as the user gesture that unlocks audio output.
    fn default() -> Self {
        Self {
            state: PlaybackState::Playing,
            visible: Widget::Play,
        }
    }
}

impl Controls {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn visible(&self) -> Widget {
        self.visible
    }

    pub fn is_visible(&self, widget: Widget) -> bool {
        self.visible == widget
    }

    pub fn play_clicked(&mut self) {
        self.state = PlaybackState::Playing;
        self.visible = Widget::Pause;
    }

    pub fn pause_clicked(&mut self) {
        self.state = PlaybackState::Paused;
        self.visible = Widget::Play;
    }

    /// Fatal stop: behaves like a pause so the user can retry with play.
    pub fn halt(&mut self) {
        self.pause_clicked();
    }
}
