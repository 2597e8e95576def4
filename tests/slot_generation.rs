//! End-to-end slot generation through the same phases the engine drives.

use hatslot::{
    utils, Classification, HatSlotResult, Item, PlayerId, ShuffledActEntrances, SlotOptions,
    SlotWorld, StaticWorldContext, YARN,
};
use rand::rngs::StdRng;

fn generate_slot(
    player: PlayerId,
    options: SlotOptions,
    locations: usize,
    rng: &mut StdRng,
) -> HatSlotResult<(SlotWorld, Vec<Item>)> {
    let mut world = SlotWorld::new(player, options);
    let ctx = StaticWorldContext::vanilla(world.options(), locations);
    let mut randomizer = ShuffledActEntrances::from_context(&ctx);

    world.create_regions(&ctx);
    let items = world.create_items(&ctx, rng)?;
    world.set_rules(&ctx, &mut randomizer, rng)?;
    Ok((world, items))
}

#[test]
fn test_full_slot_generation() -> HatSlotResult<()> {
    let options = SlotOptions {
        chapter5_min_cost: 5,
        chapter5_max_cost: 10,
        trap_chance: 0,
        act_randomizer: 0,
        ..SlotOptions::default()
    };
    let mut rng = utils::create_rng(12345);
    let (world, items) = generate_slot(PlayerId(1), options, 180, &mut rng)?;

    assert_eq!(items.len(), 180);
    assert!(items
        .iter()
        .all(|item| item.classification != Classification::Trap));

    let data = world.fill_slot_data()?;
    let finale = data.get_int("Chapter5Cost").unwrap();
    assert!((5..=10).contains(&finale));
    assert!(!data.contains_key("chapter1_tutorial"));
    assert!(world.act_connections().is_empty());

    let required_yarn = items
        .iter()
        .filter(|item| item.name == YARN && item.is_progression())
        .count() as i64;
    assert_eq!(required_yarn, world.hat_yarn_costs().total());
    Ok(())
}

#[test]
fn test_act_randomizer_records_connections() -> HatSlotResult<()> {
    let options = SlotOptions {
        act_randomizer: 1,
        ..SlotOptions::default()
    };
    let mut rng = utils::create_rng(7);
    let (world, _) = generate_slot(PlayerId(1), options, 180, &mut rng)?;

    let data = world.fill_slot_data()?;
    assert_eq!(world.act_connections().len(), 25);
    for (original, new) in world.act_connections().iter() {
        assert_eq!(data.get_text(original), Some(new));
    }
    Ok(())
}

#[test]
fn test_players_do_not_share_state() -> HatSlotResult<()> {
    let mut rng = utils::create_rng(99);
    let options = SlotOptions {
        act_randomizer: 1,
        ..SlotOptions::default()
    };

    let (first, first_items) = generate_slot(PlayerId(1), options.clone(), 180, &mut rng)?;
    let snapshot = first.clone();
    let (second, second_items) = generate_slot(PlayerId(2), options, 180, &mut rng)?;

    // Generating the second player leaves the first one untouched.
    assert_eq!(first.hat_craft_order(), snapshot.hat_craft_order());
    assert_eq!(first.hat_yarn_costs(), snapshot.hat_yarn_costs());
    assert_eq!(first.act_connections(), snapshot.act_connections());
    assert_eq!(first.fill_slot_data()?, snapshot.fill_slot_data()?);

    assert!(first_items.iter().all(|item| item.player == PlayerId(1)));
    assert!(second_items.iter().all(|item| item.player == PlayerId(2)));
    assert_eq!(second.player(), PlayerId(2));
    Ok(())
}

#[test]
fn test_same_seed_reproduces_every_player() -> HatSlotResult<()> {
    let run = |seed: u64| -> HatSlotResult<Vec<String>> {
        let mut rng = utils::create_rng(seed);
        let mut rendered = Vec::new();
        for id in 1..=3 {
            let options = SlotOptions {
                act_randomizer: 1,
                trap_chance: 40,
                ..SlotOptions::default()
            };
            let (world, items) = generate_slot(PlayerId(id), options, 200, &mut rng)?;
            rendered.push(world.fill_slot_data()?.to_json()?);
            rendered.push(format!("{items:?}"));
        }
        Ok(rendered)
    };

    assert_eq!(run(2024)?, run(2024)?);
    assert_ne!(run(2024)?, run(2025)?);
    Ok(())
}

#[test]
fn test_dlc_slot_includes_add_on_costs() -> HatSlotResult<()> {
    let options = SlotOptions {
        enable_dlc1: 1,
        enable_dlc2: 1,
        ..SlotOptions::default()
    };
    let mut rng = utils::create_rng(3);
    let (world, items) = generate_slot(PlayerId(1), options, 220, &mut rng)?;

    assert_eq!(items.len(), 220);
    let mut spoiler = Vec::new();
    world.write_spoiler(&mut spoiler)?;
    let spoiler = String::from_utf8(spoiler).unwrap();
    assert!(spoiler.contains("Chapter 6 Cost: 12"));
    assert!(spoiler.contains("Chapter 7 Cost: 30"));
    assert_eq!(spoiler.lines().count(), 7 + 5);
    Ok(())
}

#[test]
fn test_overfull_configuration_fails() {
    let options = SlotOptions::default();
    let mut rng = utils::create_rng(1);
    let result = generate_slot(PlayerId(1), options, 50, &mut rng);
    assert!(matches!(
        result,
        Err(hatslot::HatSlotError::GenerationFailed(_))
    ));
}
