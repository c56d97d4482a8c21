pub mod application {
    pub mod product {
        pub mod compute_margins;
        pub mod create;
        pub mod delete;
        pub mod get_above_price;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod margin;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod compute_margins;
            pub mod create;
            pub mod delete;
            pub mod get_above_price;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}
