//! State Management Layer
//!
//! State that outlives a single event handler. Controllers own their state
//! holders and mutate them in response to page events:
//!
//! ```text
//! Page Event → Controller → State Method → Storage Write → View Update
//! ```

mod preference;

pub use preference::*;
