//! Segue: CSS transitions for retained-mode UI scenes.
//!
//! The umbrella crate re-exports the three pieces of the engine:
//! - [`css`]: `transition` shorthand and longhand parsing
//! - [`motion`]: the frame-driven transition engine and style sink
//! - [`config`]: `segue.toml` and environment configuration

pub use segue_config as config;
pub use segue_css as css;
pub use segue_motion as motion;

pub use segue_config::SegueConfig;
pub use segue_css::{parse_shorthand, TimingCurve, TransitionDeclaration};
pub use segue_motion::{MemorySink, StyleMap, StyleSink, StyleValue, TransitionEngine};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexports_wire_together() {
        let declarations = parse_shorthand("opacity 0.2s ease-in");
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].timing, TimingCurve::EaseIn);

        let mut engine = TransitionEngine::new();
        let mut sink = MemorySink::new();
        sink.insert_node("node");

        let mut from = StyleMap::new();
        from.set("opacity", 0.0);
        let mut to = StyleMap::new();
        to.set("opacity", 1.0);

        engine.apply_transition(&mut sink, "node", &from, &to, &declarations);
        engine.tick(&mut sink, 0.3);
        assert_eq!(sink.alpha("node"), 1.0);
    }
}
