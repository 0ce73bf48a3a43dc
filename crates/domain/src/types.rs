// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::enumeration::define_enumeration;

define_enumeration! {
    /// The kind of a metering point.
    ///
    /// Drives both field applicability and which business rule strategy
    /// governs the master data.
    MeteringPointType {
        Consumption,
        Production,
        Exchange,
        VEProduction,
        Analysis,
        ElectricalHeating,
        InternalUse,
        NetConsumption,
        NetProduction,
        OtherConsumption,
        OtherProduction,
        OwnProduction,
        TotalConsumption,
        WholesaleServices,
        ConsumptionFromGrid,
        ExchangeReactiveEnergy,
        GridLossCorrection,
        NetFromGrid,
        NetToGrid,
        SupplyToGrid,
        SurplusProductionGroup,
    }
}

impl MeteringPointType {
    /// Returns whether this is a parent type (Consumption, Production or Exchange).
    ///
    /// All other types are special types, typically attached to a parent.
    #[must_use]
    pub const fn is_parent(self) -> bool {
        matches!(self, Self::Consumption | Self::Production | Self::Exchange)
    }
}

define_enumeration! {
    /// Regulatory net settlement group.
    NetSettlementGroup {
        Zero,
        One,
        Two,
        Three,
        Six,
        NinetyNine,
    }
}

impl NetSettlementGroup {
    /// Groups Zero and `NinetyNine` are the groups without net settlement.
    #[must_use]
    pub const fn is_without_net_settlement(self) -> bool {
        matches!(self, Self::Zero | Self::NinetyNine)
    }
}

define_enumeration! {
    /// Meter reading periodicity.
    ReadingOccurrence {
        Yearly,
        Monthly,
        Hourly,
        Quarterly,
    }
}

define_enumeration! {
    /// Settlement method of a consumption metering point.
    SettlementMethod {
        Flex,
        Profiled,
        NonProfiled,
    }
}

define_enumeration! {
    ConnectionType {
        /// Connected directly to the grid.
        Direct,
        /// Connected through the customer's installation.
        Installation,
    }
}

define_enumeration! {
    DisconnectionType {
        Remote,
        Manual,
    }
}

define_enumeration! {
    /// Technology of a production facility.
    AssetType {
        SteamTurbineWithBackPressureMode,
        GasTurbine,
        CombinedCycle,
        CombustionEngineGas,
        SteamTurbineWithCondensation,
        Boiler,
        StirlingEngine,
        PermanentConnectedElectricalEnergyStorageFacilities,
        TemporarilyConnectedElectricalEnergyStorageFacilities,
        FuelCells,
        PhotoVoltaicCells,
        WindTurbines,
        HydroelectricPower,
        WavePower,
        MixedProduction,
        ProductionWithElectricalEnergyStorageFacilities,
        PowerToX,
        RegenerativeDemandFacility,
        CombustionEngineDiesel,
        CombustionEngineBio,
        NoTechnology,
        UnknownTechnology,
    }
}

define_enumeration! {
    ProductType {
        Tariff,
        FuelQuantity,
        PowerActive,
        PowerReactive,
        EnergyActive,
        EnergyReactive,
    }
}

define_enumeration! {
    /// Unit in which the metering point's time series are measured.
    #[allow(clippy::upper_case_acronyms)]
    MeasurementUnitType {
        KWh,
        KW,
        MW,
        MWh,
        Tonne,
        KVArh,
        MVAr,
    }
}

define_enumeration! {
    #[allow(clippy::upper_case_acronyms)]
    CountryCode {
        DK,
    }
}

define_enumeration! {
    /// How the metering point's values are obtained.
    MeteringMethod {
        /// Read from a physical meter.
        Physical,
        /// Derived without a meter.
        Virtual,
        /// Calculated from other metering points.
        Calculated,
    }
}

define_enumeration! {
    /// Connection state of a metering point.
    ConnectionState {
        New,
        Connected,
        Disconnected,
        ClosedDown,
    }
}
