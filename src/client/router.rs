use dioxus::prelude::*;

use crate::client::{
    components::{ContentLayout, FormLayout, RequireAuthenticated, RestrictAuthenticated},
    routes::{
        About, Confirm, Home, LocationMap, Login, NotFound, PrivacyPolicy, Products, Register,
        Resume, Tasks,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ContentLayout)]

        #[route("/")]
        Home {},

        #[route("/resume")]
        Resume {},

        #[route("/about")]
        About {},

        #[route("/products")]
        Products {},

        #[route("/privacy")]
        PrivacyPolicy {},

        #[route("/map")]
        LocationMap {},

        #[layout(RequireAuthenticated)]

            #[route("/tasks")]
            Tasks {},

        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },

    #[end_layout]

    #[layout(FormLayout)]

        #[layout(RestrictAuthenticated)]

            #[route("/login")]
            Login {},

            #[route("/register")]
            Register {},

            #[route("/confirm?:token")]
            Confirm { token: String },
}
