// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::master_data::MasterData;
use crate::types::{ConnectionState, MeteringPointType};
use crate::values::GsrnNumber;
use serde::{Deserialize, Serialize};

/// Current state of a metering point, as read from its owner.
///
/// Update rules compare incoming master data against this snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeteringPoint {
    /// GSRN number identifying the metering point.
    pub gsrn_number: GsrnNumber,
    /// The metering point type.
    pub metering_point_type: MeteringPointType,
    /// The connection state.
    pub connection_state: ConnectionState,
    /// GSRN number of the parent metering point, for special types.
    pub parent: Option<GsrnNumber>,
    /// The master data currently in effect.
    pub master_data: MasterData,
}

impl MeteringPoint {
    /// Creates a metering point snapshot without a parent.
    #[must_use]
    pub const fn new(
        gsrn_number: GsrnNumber,
        metering_point_type: MeteringPointType,
        connection_state: ConnectionState,
        master_data: MasterData,
    ) -> Self {
        Self {
            gsrn_number,
            metering_point_type,
            connection_state,
            parent: None,
            master_data,
        }
    }

    /// Returns whether the metering point is closed down.
    #[must_use]
    pub fn is_closed_down(&self) -> bool {
        self.connection_state == ConnectionState::ClosedDown
    }
}
