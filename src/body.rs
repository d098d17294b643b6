//! Body state containers for coupled two-body integration.

/// Cartesian state: position (m) followed by velocity (m/s).
pub type State = [f64; 6];

/// Composite state of two bodies, body 1 first.
pub type CompositeState = [f64; 12];

/// Named body with its current time and Cartesian state.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    state: State,
    time: f64,
}

impl Body {
    pub fn new(name: impl Into<String>, state: State, time: f64) -> Self {
        Self {
            name: name.into(),
            state,
            time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn position(&self) -> [f64; 3] {
        [self.state[0], self.state[1], self.state[2]]
    }

    pub fn velocity(&self) -> [f64; 3] {
        [self.state[3], self.state[4], self.state[5]]
    }

    pub fn set_time_and_state(&mut self, state: State, time: f64) {
        self.state = state;
        self.time = time;
    }
}

/// Splits a composite state into the states of two bodies.
///
/// The order of the bodies must match the order used to assemble the composite state.
#[derive(Debug, Clone)]
pub struct DataUpdater {
    body_1: Body,
    body_2: Body,
}

impl DataUpdater {
    pub fn new(body_1: Body, body_2: Body) -> Self {
        Self { body_1, body_2 }
    }

    pub fn update_time_and_composite_state(&mut self, time: f64, composite: &CompositeState) {
        let (state_1, state_2) = split_composite_state(composite);
        self.body_1.set_time_and_state(state_1, time);
        self.body_2.set_time_and_state(state_2, time);
    }

    pub fn body_1(&self) -> &Body {
        &self.body_1
    }

    pub fn body_2(&self) -> &Body {
        &self.body_2
    }

    pub fn into_bodies(self) -> (Body, Body) {
        (self.body_1, self.body_2)
    }
}

fn split_composite_state(composite: &CompositeState) -> (State, State) {
    let mut state_1 = [0.0; 6];
    let mut state_2 = [0.0; 6];
    state_1.copy_from_slice(&composite[..6]);
    state_2.copy_from_slice(&composite[6..]);
    (state_1, state_2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_accessors() {
        let mut body = Body::new("body1", [1.2, 3.4, -9.7, 4.6, -5.1, -0.1], 0.0);
        assert_eq!(body.name(), "body1");
        assert_eq!(body.time(), 0.0);
        assert_eq!(body.position(), [1.2, 3.4, -9.7]);
        assert_eq!(body.velocity(), [4.6, -5.1, -0.1]);

        body.set_time_and_state([-4.5, 4.4, 7.8, -0.2, 6.7, -6.9], 3.1);
        assert_eq!(body.time(), 3.1);
        assert_eq!(body.state(), &[-4.5, 4.4, 7.8, -0.2, 6.7, -6.9]);
        assert_eq!(body.position(), [-4.5, 4.4, 7.8]);
        assert_eq!(body.velocity(), [-0.2, 6.7, -6.9]);
    }

    #[test]
    fn data_updater_splits_composite_state() {
        let body_1 = Body::new("body1", [1.2, 3.4, -9.7, 4.6, -5.1, -0.1], 0.0);
        let body_2 = Body::new("body2", [-4.5, 4.4, 7.8, -0.2, 6.7, -6.9], 0.0);
        let mut updater = DataUpdater::new(body_1, body_2);

        let composite = [
            6.0, -1.3, 5.8, 4.3, 2.0, -0.9, 1.1, -2.5, -9.8, 1.2, -0.4, 1.3,
        ];
        updater.update_time_and_composite_state(2.4, &composite);

        assert_eq!(updater.body_1().state(), &[6.0, -1.3, 5.8, 4.3, 2.0, -0.9]);
        assert_eq!(updater.body_2().state(), &[1.1, -2.5, -9.8, 1.2, -0.4, 1.3]);
        assert_eq!(updater.body_1().time(), 2.4);
        assert_eq!(updater.body_2().time(), 2.4);

        let (body_1, body_2) = updater.into_bodies();
        assert_eq!(body_1.name(), "body1");
        assert_eq!(body_2.name(), "body2");
    }
}
