//! Protocol Buffer definitions and generated code for the cluster's
//! administrative RPC surface.
//!
//! Generated at build time by [`tonic-build`] from `proto/admin_service.proto`.
//! The harness consumes this contract; it does not own it.

pub mod admin {
    include!(concat!(env!("OUT_DIR"), "/cluster.admin.rs"));
}
