// Domain-layer modules and shared errors/models
pub mod course {
    pub use crate::course::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod validation {
    pub use crate::validation::*;
}

pub mod errors {
    pub use crate::errors::*;
}
