//! Passwords produced by the games themselves.

use codec::{decode, encode, CharacterStats, Element, ItemSlot, PasswordSize};

const LEVEL_36_GOLD: &str = "n389#mrtcQwF$LXdxuZLH4HK+httqmDejh3A6K?dQUeabkwahRDFx$9BP7Pf%C#MyZnDip6T!kF&zi#7nkikf+Pq2Dv?jZi8xG&%##MA++REG3pVRcK2vD74fQdMPYWWfy533j9NzubAicZ&DL8S#YGrWFUpdvvMF#!!K+$$PaDBBV?XFSM5LL5SQQ9WUfVe3ZZi755qpcaatUeexwmjj#rpp+vGuuD!y$h$&wMNB==SFDDgXSJJ5t727!VTTcZWhgUy";
const LEVEL_36_SILVER: &str = "Yz??SPJHi!Q7NdrKrEJcQMbKR6vg#Gnu947#%4KDgAm9DackGLfUuRxJs!TD!";
const LEVEL_36_BRONZE: &str = "5YtDFsa%xTtXChuv";

const LEVEL_48_GOLD: &str = "r#aG$NHze8X7L!kN=z4RdePggG&9W3jiJRE8xbG5Rjsk9ENVb4%qRE+3HyfNPSG5fAnrdgLU$7Kpm9Dpss6HkZJFH%WghP23dDQi2&Z=euY$xMU?VS76Tt7&956HcxgY#R+&WF7sp7#!Le2WJ3zMgiS7yDZYG77JD3auH7eyM6cj&PA%=Lk2uE3ryJhV#xPc!=Tg$D2jmBJ4LRN8vjLTd!QXh$UdNNBZ8cf5bYPLah?Qem%gVsaCW6=75tu?May%+euu";
const LEVEL_48_SILVER: &str = "i?scDMzvdvWn!x?YdpLmgwLV5JGw%YseVM?UVjjZztkJWkv48i=XYgi?N=vEJ";
const LEVEL_48_BRONZE: &str = "i3iaDm=xdvww#=HV";

const ULTIMATE_GOLD: &str = "uHYyiXLJJBg=VPk5TteF27Gp6gcmA$b9?XjdAthhJ&qv6Du$!QCZzxRqyzz&5jADYeWb94Wr?Lv!Zz#qF!eB?=B8NkFQyzBiw52fw2KJdrVfS$Ap=JjT%i%Fs7utcHFRP9Vrm3mj%$AiQgBTrCJVMcFxb2iEMtn$9S7bdWbfhy3gkn7kqsbsrvxgvz?kzG$+r$ACvAEVH!FKM$KPBSeV7fXU7eK=Z57Q59bU9q9J#jvC5indraptsSj!zkjy#$p#TAcE";

const KRZAQ_GOLD: &str = "VsuiNqS3nTqeWsFYFj$sfUXHPLVsUEreY8m+5?yrAM#2zevb3LFjPr$2fVYbV#JDnZ2Us#QUq8zgcC&7mhH+6xyC8dq7D7A8P$!93UB%7YFBfNxtABLsE6XMM%X!ZVvn582!tappRecfD&D#SzaCKuDuqQHyuUMu&zZS=&5WDkAa3JEe7NJrjcTPpgXTt2m4Yyr7U#vTd9=!hdD$mUiJBsnNFwsZTL?x7Q%?3JVC+8ZGCc5CMHhaPMy8V%Ssj2Wxh6Uw";

const ALL: [&str; 8] = [
    LEVEL_36_GOLD,
    LEVEL_36_SILVER,
    LEVEL_36_BRONZE,
    LEVEL_48_GOLD,
    LEVEL_48_SILVER,
    LEVEL_48_BRONZE,
    ULTIMATE_GOLD,
    KRZAQ_GOLD,
];

const fn stats(
    level: i32,
    hp_max: i32,
    pp_max: i32,
    attack: i32,
    defense: i32,
    agility: i32,
    luck: i32,
) -> CharacterStats {
    CharacterStats {
        level,
        hp_max,
        pp_max,
        attack,
        defense,
        agility,
        luck,
    }
}

const LEVEL_36_STATS: [CharacterStats; 4] = [
    stats(36, 299, 120, 176, 71, 149, 5),
    stats(36, 350, 111, 143, 76, 129, 4),
    stats(36, 279, 135, 134, 60, 178, 4),
    stats(36, 290, 145, 136, 69, 139, 7),
];

const LEVEL_48_STATS: [CharacterStats; 4] = [
    stats(48, 393, 144, 224, 92, 196, 5),
    stats(48, 446, 136, 188, 97, 169, 4),
    stats(48, 363, 164, 175, 78, 227, 4),
    stats(48, 380, 173, 179, 85, 179, 7),
];

const KRZAQ_STATS: [CharacterStats; 4] = [
    stats(35, 303, 135, 152, 63, 145, 9),
    stats(34, 304, 114, 131, 63, 122, 2),
    stats(34, 288, 134, 125, 61, 148, 4),
    stats(34, 270, 127, 133, 61, 133, 5),
];

#[test]
fn every_real_password_reencodes_exactly() {
    for password in ALL {
        let decoded = decode(password, None).unwrap();
        assert_eq!(decoded.size.char_count(), password.len());
        assert_eq!(encode(&decoded.snapshot, decoded.size).unwrap(), password);
    }
}

#[test]
fn level_36_stats_match_every_size() {
    let gold = decode(LEVEL_36_GOLD, None).unwrap();
    assert_eq!(gold.size, PasswordSize::Gold);
    assert_eq!(gold.snapshot.characters, LEVEL_36_STATS);
    assert_eq!(gold.snapshot.coins, 679_028);

    let silver = decode(LEVEL_36_SILVER, Some(PasswordSize::Silver)).unwrap();
    assert_eq!(silver.snapshot.characters, LEVEL_36_STATS);
    assert_eq!(silver.snapshot.coins, 0);

    let bronze = decode(LEVEL_36_BRONZE, None).unwrap();
    assert_eq!(bronze.size, PasswordSize::Bronze);
    for character in bronze.snapshot.characters {
        assert_eq!(character.level, 36);
        assert_eq!(character.hp_max, 0);
    }
}

#[test]
fn level_48_stats_match() {
    let gold = decode(LEVEL_48_GOLD, None).unwrap();
    assert_eq!(gold.snapshot.characters, LEVEL_48_STATS);
    assert_eq!(gold.snapshot.coins, 916_969);

    let silver = decode(LEVEL_48_SILVER, None).unwrap();
    assert_eq!(silver.snapshot.characters, LEVEL_48_STATS);

    let bronze = decode(LEVEL_48_BRONZE, None).unwrap();
    assert!(bronze.snapshot.characters.iter().all(|c| c.level == 48));
}

#[test]
fn krzaq_stats_match() {
    let decoded = decode(KRZAQ_GOLD, None).unwrap();
    assert_eq!(decoded.snapshot.characters, KRZAQ_STATS);
    assert_eq!(decoded.snapshot.coins, 527_690);
    assert_eq!(decoded.snapshot.flags, 0x2B);
    // A stack of two herbs in Mia's bag.
    assert!(decoded.snapshot.items[3].contains(&ItemSlot::new(0xB5, 2)));
}

#[test]
fn ultimate_password_is_maxed() {
    let decoded = decode(ULTIMATE_GOLD, None).unwrap();
    let snapshot = decoded.snapshot;
    assert_eq!(snapshot.coins, 999_999);
    assert_eq!(snapshot.flags, 0x33);
    for character in snapshot.characters {
        assert_eq!(character, stats(54, 1999, 1999, 511, 511, 511, 99));
    }
    assert_eq!(snapshot.items[2][0], ItemSlot::new(0xBF, 30));
    assert_eq!(snapshot.items[3][14], ItemSlot::new(0xBF, 30));
}

#[test]
fn all_djinn_collected() {
    for password in ALL {
        let snapshot = decode(password, None).unwrap().snapshot;
        for element in Element::ALL {
            assert_eq!(snapshot.djinn_count(element), 7, "{element}");
        }
    }
}

#[test]
fn small_sizes_list_all_special_items() {
    for password in [
        LEVEL_36_SILVER,
        LEVEL_36_BRONZE,
        LEVEL_48_SILVER,
        LEVEL_48_BRONZE,
    ] {
        let snapshot = decode(password, None).unwrap().snapshot;
        assert_eq!(snapshot.special_items, 0xFF);
        let ids: Vec<u16> = snapshot.items[0][..8].iter().map(|s| s.item_id).collect();
        assert_eq!(ids, (0xC8..=0xCF).collect::<Vec<u16>>());
        assert!(snapshot.items[0][8..].iter().all(|s| s.is_empty()));
    }
}

#[test]
fn tracked_quantities_decode() {
    let snapshot = decode(LEVEL_36_GOLD, None).unwrap().snapshot;
    let isaac = &snapshot.items[0];
    assert!(isaac.contains(&ItemSlot::new(0xEF, 30)));
    assert!(isaac.contains(&ItemSlot::new(0xE5, 12)));
    assert!(isaac.contains(&ItemSlot::new(0xE4, 27)));
    // Untracked items always report a single unit.
    assert!(isaac.contains(&ItemSlot::new(0x100, 1)));
    assert_eq!(isaac[14], ItemSlot::EMPTY);
}
