//! Stateless view components. Each returns the actions the user triggered
//! this frame; the manager dispatches them after rendering.

pub mod entity_form;
pub mod entity_list;
