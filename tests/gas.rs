use boidsim::collision;
use boidsim::{Bounds, Error, GasParams, GasTank, Particle, Result, Vector};

fn tank_bounds() -> Bounds {
    Bounds::new(Vector::xy(100.0, 50.0), 500.0, 400.0)
}

#[test]
fn equal_masses_swap_on_head_on_hit() -> Result<()> {
    let a = Particle::new(Vector::ZERO, Vector::xy(1.0, 0.0), 1.0, 1.5)?;
    let b = Particle::new(Vector::xy(2.0, 0.0), Vector::xy(-1.0, 0.0), 1.0, 1.5)?;
    assert!(collision::overlapping(&a, &b));

    let (va, vb) = collision::resolve(&a, &b);
    assert_eq!(va, Vector::xy(-1.0, 0.0));
    assert_eq!(vb, Vector::xy(1.0, 0.0));
    Ok(())
}

#[test]
fn separating_pair_keeps_velocity() -> Result<()> {
    let a = Particle::new(Vector::ZERO, Vector::xy(1.0, 0.0), 1.0, 1.5)?;
    let b = Particle::new(Vector::xy(2.0, 0.0), Vector::xy(1.0, 0.0), 1.0, 1.5)?;
    assert_eq!(collision::collide_velocity(&a, &b), Vector::xy(1.0, 0.0));
    Ok(())
}

#[test]
fn unequal_masses_conserve_momentum_and_energy() -> Result<()> {
    let a = Particle::new(Vector::xy(10.0, 10.0), Vector::xy(3.0, 1.0), 10.0, 7.0)?;
    let b = Particle::new(Vector::xy(20.0, 14.0), Vector::xy(-2.0, -0.5), 50.0, 13.0)?;
    let (va, vb) = collision::resolve(&a, &b);

    let before = a.momentum() + b.momentum();
    let after = va * a.mass + vb * b.mass;
    assert!(before.distance(&after) < 1e-3);

    let energy_before = a.kinetic_energy() + b.kinetic_energy();
    let energy_after = 0.5 * a.mass * va.length_squared() + 0.5 * b.mass * vb.length_squared();
    assert!((energy_before - energy_after).abs() < 1e-3);
    Ok(())
}

#[test]
fn tank_conserves_kinetic_energy() -> Result<()> {
    let mut tank = GasTank::seeded(tank_bounds(), &GasParams::default(), 23)?;
    let start = tank.total_kinetic_energy();

    for _ in 0..200 {
        tank.update();
    }

    let end = tank.total_kinetic_energy();
    assert!((start - end).abs() / start < 1e-3);
    Ok(())
}

#[test]
fn custom_templates_from_lists() -> Result<()> {
    let params = GasParams::from_lists(&[3, 4], &[2.0, 8.0], &[4.0, 9.0])?;
    let tank = GasTank::seeded(tank_bounds(), &params, 1)?;

    assert_eq!(tank.particle_types().len(), 2);
    assert_eq!(tank.particles().iter().filter(|p| p.kind == 1).count(), 4);
    assert!(tank.particles().iter().all(|p| p.kind != 1 || p.mass == 8.0));

    let invalid = GasParams::from_lists(&[1], &[-1.0], &[4.0]);
    assert!(matches!(invalid, Err(Error::InvalidParam(_))));
    Ok(())
}

#[test]
fn same_seed_same_tank() -> Result<()> {
    let a = GasTank::seeded(tank_bounds(), &GasParams::default(), 99)?;
    let b = GasTank::seeded(tank_bounds(), &GasParams::default(), 99)?;
    assert_eq!(a.particles(), b.particles());
    Ok(())
}
