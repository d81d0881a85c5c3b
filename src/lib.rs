pub mod shared {
    pub mod http {
        pub mod api_error;
    }
}

pub mod modules {
    pub mod employees {
        pub mod core {
            pub mod employee;
            pub mod ports;
        }
        pub mod use_cases {
            pub mod list_employees {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_employee {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod in_memory_store;
            }
        }
    }
}

pub mod shell;
