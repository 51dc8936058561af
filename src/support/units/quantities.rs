use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, P1, P3, Z0},
};

/// Thermal resistance, K/W in SI.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Construction and extraction of [`ThermalResistance`] in kelvin per watt.
pub trait ThermalResistanceExt {
    /// Creates a thermal resistance from a value in K/W.
    fn kelvin_per_watt(value: f64) -> Self;

    /// Returns the thermal resistance in K/W.
    fn as_kelvin_per_watt(&self) -> f64;
}

impl ThermalResistanceExt for ThermalResistance {
    fn kelvin_per_watt(value: f64) -> Self {
        TemperatureInterval::new::<delta_kelvin>(value) / Power::new::<watt>(1.0)
    }

    fn as_kelvin_per_watt(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Area, HeatTransfer, Length, ThermalConductivity},
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    #[test]
    fn conduction_resistance_has_resistance_units() {
        let thickness = Length::new::<meter>(0.000_762);
        let k = ThermalConductivity::new::<watt_per_meter_kelvin>(398.0);
        let area = Area::new::<square_meter>(1.27e-4);

        let r: ThermalResistance = thickness / (k * area);

        assert_relative_eq!(
            r.as_kelvin_per_watt(),
            0.000_762 / (398.0 * 1.27e-4),
            max_relative = 1e-12
        );
    }

    #[test]
    fn convection_resistance_has_resistance_units() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(1.18e6);
        let area = Area::new::<square_meter>(1.27e-4);

        let r: ThermalResistance = (h * area).recip();

        assert_relative_eq!(
            r.as_kelvin_per_watt(),
            1.0 / (1.18e6 * 1.27e-4),
            max_relative = 1e-12
        );
    }

    #[test]
    fn power_times_resistance_is_temperature_interval() {
        let r = ThermalResistance::kelvin_per_watt(0.5);
        let dt: TemperatureInterval = Power::new::<watt>(10.0) * r;
        assert_relative_eq!(dt.get::<delta_kelvin>(), 5.0);
    }
}
