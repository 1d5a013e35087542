// Copyright 2015-2018 Aerospike, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

mod admin_command;
mod batch_operate_command;
mod batch_read_command;
pub(crate) mod buffer;
mod delete_command;
mod exists_command;
mod info_command;
mod operate_command;
mod particle_type;
mod read_command;
mod scan_command;
mod single_command;
mod stream_command;
mod touch_command;
mod write_command;

mod field_type;

use std::sync::Arc;

pub use self::particle_type::ParseParticleError;
pub(crate) use self::{
    admin_command::{hash_password, AdminCommand},
    batch_operate_command::BatchOperateCommand,
    batch_read_command::BatchReadCommand,
    delete_command::DeleteCommand,
    exists_command::ExistsCommand,
    info_command::Message,
    operate_command::OperateCommand,
    particle_type::ParticleType,
    read_command::ReadCommand,
    scan_command::ScanCommand,
    single_command::SingleCommand,
    stream_command::StreamCommand,
    touch_command::TouchCommand,
    write_command::WriteCommand,
};
use crate::{cluster::Node, net::Connection, ResultCode};

pub type Result<T, E = CommandError> = crate::errors::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to prepare send buffer")]
    PrepareBuffer(#[source] Box<Self>),
    #[error("Failed to set timeout for send buffer")]
    SetTimeout(#[source] Box<Self>),
    #[error("Invalid size for buffer: {size} (max {max})")]
    BufferSize { size: usize, max: usize },
    #[error("Timeout")]
    Timeout,
    #[error("Server error: {0}")]
    ServerError(ResultCode),
    #[error("Invalid UTF-8 content ecountered")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("I/O related error")]
    Io(#[from] std::io::Error),
    #[error("Failed hashing password")]
    Hashing(#[from] bcrypt::BcryptError),
    #[error("Network error")]
    Network(#[from] crate::net::NetError),
    #[error("Buffer error")]
    Buffer(#[from] self::buffer::BufferError),
    #[error("Particle error")]
    Particle(#[from] crate::value::ParticleError),
    #[error("No connections available")]
    NoConnection,
    #[error("Parsing failed: {0}")]
    Parse(&'static str),
    #[error("Other error")]
    Other(#[source] Box<crate::errors::Error>),
    #[error("Transaction error")]
    Txn(#[from] crate::txn::TxnError),
    /// A command failed after exhausting its retry budget (or timing out). Carries the
    /// information a caller needs to decide whether the attempted write may have landed on the
    /// server: how many times the command was actually sent, whether the outcome is in-doubt, and
    /// which node it was last sent to.
    #[error("command failed after {iteration} attempt(s), in_doubt={in_doubt}")]
    Failed {
        #[source]
        source: Box<Self>,
        iteration: usize,
        in_doubt: bool,
        last_node: Option<String>,
    },
}

// Command interface describes all commands available
#[async_trait::async_trait]
trait Command {
    fn prepare_buffer(&mut self, conn: &mut Connection) -> Result<()>;
    async fn get_node(&self) -> Option<Arc<Node>>;
    async fn parse_result(&mut self, conn: &mut Connection) -> Result<()>;

    /// Whether this command carries write semantics. Governs the in-doubt computation: only
    /// writes can leave a server-side effect behind when the client can't confirm the outcome.
    fn is_write(&self) -> bool {
        false
    }
}

/// A network-level error means the server may never have seen the request (or its response never
/// made it back), as opposed to a clean server-side rejection.
#[must_use]
pub fn is_indeterminate(err: &CommandError) -> bool {
    matches!(
        err,
        CommandError::Timeout | CommandError::Io(_) | CommandError::Network(_)
    )
}

#[must_use]
pub const fn keep_connection(err: &CommandError) -> bool {
    matches!(err, CommandError::ServerError(_))
}

/// Returns whether a command that failed with this error should be retried by the caller's
/// retry loop, as opposed to surfacing the error immediately.
#[must_use]
pub fn is_retryable(err: &CommandError) -> bool {
    matches!(err, CommandError::ServerError(rc) if rc.is_retryable())
}

/// Wraps a terminal error with the retry/in-doubt/node context a caller needs to decide whether
/// the command may have taken effect on the server. A write is in doubt once it has been sent
/// more than once, or sent exactly once and failed with an error that means the server may never
/// have received or answered it.
pub(crate) fn wrap_failed(
    err: CommandError,
    iteration: usize,
    sent_count: u32,
    is_write: bool,
    last_node: Option<String>,
) -> CommandError {
    let in_doubt = is_write && (sent_count > 1 || (sent_count == 1 && is_indeterminate(&err)));

    CommandError::Failed {
        source: Box::new(err),
        iteration,
        in_doubt,
        last_node,
    }
}
