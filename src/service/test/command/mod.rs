use test_utils::{builder::ProviderBuilder, http::create_test_http_client};

use super::test_invocation;
use crate::{
    model::command::InteractionReply,
    service::command::{CommandService, IP_LOOKUP_FAILED_MESSAGE},
};

mod reply;
