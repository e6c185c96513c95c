pub mod application {
    pub mod auth {
        mod hashing;
        pub mod login;
        pub mod register;
    }
    pub mod basket {
        pub mod add_item;
        pub mod clear;
        pub mod enrich;
        pub mod get;
        pub mod remove_item;
    }
    pub mod checkout {
        pub mod get_order;
        pub mod get_user_orders;
        pub mod place_order;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod seed;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod auth {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod login;
            pub mod register;
        }
    }
    pub mod basket {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear;
            pub mod get;
            pub mod remove_item;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod services;
        pub mod use_cases {
            pub mod place_order;
            pub mod get_order;
            pub mod get_user_orders;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod seed;
            pub mod update;
        }
    }
    pub mod user {
        pub mod errors;
        pub mod model;
        pub mod repository;
    }
}

#[cfg(test)]
pub(crate) mod test_support;
