use crate::{
    cli::{Cli, ColorArg},
    domain::random::RandomSource,
};

/// Replays a fixed list of unit samples, wrapping around at the end.
#[derive(Debug, Clone)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    pub(crate) fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

pub(crate) fn test_cli() -> Cli {
    Cli {
        blue: false,
        hue_family: None,
        tint: None,
        class_name: None,
        fps: None,
        seed: Some(7),
        color: ColorArg::Auto,
        no_color: false,
        config: None,
        log_file: None,
        one_shot: None,
    }
}
