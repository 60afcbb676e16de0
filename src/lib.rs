// Crate entry point. Re-export modules so tests and the binary can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod infrastructure {
        pub mod mirror;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod registry;
        }
        pub mod application {
            pub mod errors;
            pub mod handler;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod error;
                pub mod http;
                pub mod pages;
            }
        }
    }
}

pub mod shell;
