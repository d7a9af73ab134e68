//! Service layer: the serialized play pipeline and uno-call enforcement.

pub mod game_flow;
pub mod uno_calls;

pub use game_flow::GameFlowService;
pub use uno_calls::UnoCallService;
