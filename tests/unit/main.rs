//! Unit test modules.

mod formulas_test;
mod sequencer_test;
mod workout_plan_test;
mod zones_test;
