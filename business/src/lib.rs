pub mod application {
    pub mod catalog {
        pub mod browse;
        pub mod detail_surface;
        pub mod form_surface;
        pub mod load;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod detail;
        pub mod form;
        pub mod projection;
        pub mod session;
        pub mod store;
        pub mod view_state;
        pub mod use_cases {
            pub mod browse;
            pub mod detail_surface;
            pub mod form_surface;
            pub mod load;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
