pub mod input_step;
pub mod keybindings;
pub mod step_icon;
pub mod stepper_view;
pub mod terminal_guard;

pub use input_step::InputStep;
pub use step_icon::StepIndicatorRow;
pub use stepper_view::{
    ButtonRenderer, IconButtons, StepperAreas, StepperLayout, StepperView, TextButtons,
};
pub use terminal_guard::TerminalSession;
