use test_utils::{builder::ProviderBuilder, http::create_test_http_client};

use crate::{model::ip::IpLookup, service::ip::PublicIpService};

mod resolve;
