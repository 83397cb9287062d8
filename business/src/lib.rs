pub mod application {
    pub mod item {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod get_by_shopping_list;
        pub mod toggle_completion;
        pub mod update;
    }
    pub mod shopping_list {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod get_by_shopping_list;
            pub mod toggle_completion;
            pub mod update;
        }
    }
    pub mod shopping_list {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
}

#[cfg(test)]
mod test_support;
