use maud::{html, Markup, DOCTYPE};

use crate::core::prelude::*;

fn page(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                (content)
            }
        }
    }
}

pub fn index() -> Markup {
    page(
        "Schools API",
        html! {
            h1 { "Welcome to the Schools API" }
            p { "Available Endpoints:" }
            ul {
                li {
                    strong { "POST /addSchool" }
                    ": Add a new school (JSON payload: name, address, latitude, longitude)."
                }
                li {
                    strong { "GET /listSchools" }
                    ": List all schools sorted by proximity (Query parameters: latitude, longitude, optional metric)."
                }
                li {
                    strong { "/api" }
                    ": The same operations with JSON responses."
                }
            }
            h2 { "Fetch Nearby Schools" }
            (location_form())
        },
    )
}

fn location_form() -> Markup {
    html! {
        form action="/listSchools" method="get" {
            label for="latitude" { "Latitude:" }
            input type="number" step="any" name="latitude" id="latitude" required;
            br;
            label for="longitude" { "Longitude:" }
            input type="number" step="any" name="longitude" id="longitude" required;
            br;
            label for="metric" { "Metric:" }
            select name="metric" id="metric" {
                option value="haversine" { "haversine (km)" }
                option value="planar" { "planar (degrees)" }
            }
            br;
            br;
            button type="submit" { "Get Schools" }
        }
    }
}

pub fn school_added() -> Markup {
    page(
        "School added",
        html! {
            h1 { "School added successfully!" }
        },
    )
}

pub fn error(message: &str) -> Markup {
    page(
        "Error",
        html! {
            h1 { "Error: " (message) }
        },
    )
}

pub fn school_list(schools: &[RankedSchool], metric: DistanceMetric) -> Markup {
    page(
        "List of Schools",
        html! {
            h1 { "List of Schools" }
            p { "Distance: " (metric.to_string()) " (" (metric.unit()) ")" }
            table border="1" cellpadding="10" cellspacing="0" {
                thead {
                    tr {
                        th { "ID" }
                        th { "Name" }
                        th { "Address" }
                        th { "Latitude" }
                        th { "Longitude" }
                        th { "Distance" }
                    }
                }
                tbody {
                    @for ranked in schools {
                        (school_row(ranked))
                    }
                }
            }
            br;
            a href="/" { "Go Back" }
        },
    )
}

fn school_row(ranked: &RankedSchool) -> Markup {
    let RankedSchool { item, distance } = ranked;
    html! {
        tr {
            td { (item.id.to_raw()) }
            td { (item.name) }
            td { (item.address) }
            td { (item.pos.lat) }
            td { (item.pos.lng) }
            td { (format!("{:.2}", distance.to_f64())) }
        }
    }
}
