// Copyright 2025 the Wayfind Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walks a listbox and a grid through typical keyboard interactions.
//!
//! Run with `RUST_LOG=debug` to see reconciliation and query-clear logging.

use rand::SeedableRng;
use rand::rngs::StdRng;
use wayfind_eligible::{
    Ability, AbilityStore, EligiblePicker, ListSpace, PickOptions, PlanePosition, PlaneSpace,
    Remap, Replace,
};
use wayfind_query::{ListQuery, PlaneQuery, TypeOptions};

fn main() {
    env_logger::init();
    listbox();
    grid();
}

fn listbox() {
    let mut options = vec!["Baleada", "Burrito", "Enchilada", "Tamale", "Tostada"];
    let mut ability = AbilityStore::new(Ability::Enabled);
    ability.set(1, Ability::Disabled);

    let mut listbox = EligiblePicker::new(ListSpace::new(options.len()), ability)
        .with_loops(true)
        .with_pick_options(PickOptions {
            replace: Replace::All,
        });

    // ArrowDown from nothing lands on the first option; again skips disabled "Burrito".
    listbox.first();
    listbox.next(listbox.location());
    println!("after two arrow-downs: {:?}", listbox.picks());

    // Typeahead: "ta" jumps to the best enabled match.
    let mut typeahead = ListQuery::new();
    typeahead.type_char('t', 0, TypeOptions::default());
    typeahead.type_char('a', 120, TypeOptions::default());
    typeahead.search(&ListSpace::new(options.len()), &options);
    typeahead.jump_pick(&mut listbox);
    println!(
        "typeahead {:?} picked {:?}",
        typeahead.query().text(),
        listbox.picks()
    );
    typeahead.tick(700);

    // The host sorts its options alphabetically in reverse; the pick follows its item.
    let before = options.clone();
    options.sort_unstable_by(|a, b| b.cmp(a));
    listbox.restructure(
        ListSpace::new(options.len()),
        &Remap::between(&before, &options),
    );
    log::info!("options reordered to {options:?}");
    println!("after reorder: {:?}", listbox.picks());

    // Disabling the picked option drops the pick.
    if let Some(&picked) = listbox.picks().first() {
        listbox.update_ability(|store| {
            store.set(picked, Ability::Disabled);
        });
    }
    println!("after disabling: {:?}", listbox.picks());

    let mut rng = StdRng::seed_from_u64(7);
    listbox.random(&mut rng);
    println!("random pick: {:?}", listbox.picks());
}

fn grid() {
    let cells = vec![
        vec!["Baleada", "foo", "bar"],
        vec!["bear", "eel", "tree"],
        vec!["sky", "fog"],
    ];
    let space = PlaneSpace::new(cells.iter().map(Vec::len));
    let mut grid = EligiblePicker::new(space.clone(), |p: PlanePosition| {
        Ability::from(p != PlanePosition::new(1, 1))
    });

    grid.first();
    grid.next_in_column(PlanePosition::new(0, 1));
    println!("down from (0, 1) skips the disabled cell: {:?}", grid.location());

    let mut typeahead = PlaneQuery::new();
    typeahead.type_char('e', 0, TypeOptions::default());
    for (row, results) in typeahead.search(&space, &cells).iter().enumerate() {
        let matches = results.iter().filter(|r| r.is_match()).count();
        println!("row {row}: {matches} matches for \"e\"");
    }
    typeahead.jump_navigate(&mut grid);
    println!("typeahead moved the cursor to {:?}", grid.location());
}
