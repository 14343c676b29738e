mod shorts;

pub mod keys {
    pub mod v1 {
        tonic::include_proto!("keys.v1");
    }
}

pub mod v1 {
    pub use crate::keys::v1::*;
    pub use crate::shorts::v1::*;
}
