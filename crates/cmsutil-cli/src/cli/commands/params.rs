//! `cmsutil params <url> -p key=value...` – append query parameters.

use cmsutil_core::urlutils::{add_url_parameters, UrlParams};

pub fn run_params(url: &str, params: Vec<(String, String)>) {
    let keywords: UrlParams = params.into_iter().collect();
    println!("{}", add_url_parameters(url, &[], &keywords));
}
