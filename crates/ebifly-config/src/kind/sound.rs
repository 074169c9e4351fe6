//! Sound kinds and categories understood by the audio layer.

use super::config_enum;

config_enum! {
    /// A sound the presentation layer can play.
    pub enum Sound: "sound" {
        AmbientCave => "AMBIENT_CAVE",
        BlockAnvilLand => "BLOCK_ANVIL_LAND",
        BlockAnvilUse => "BLOCK_ANVIL_USE",
        BlockBeaconActivate => "BLOCK_BEACON_ACTIVATE",
        BlockBeaconAmbient => "BLOCK_BEACON_AMBIENT",
        BlockBeaconDeactivate => "BLOCK_BEACON_DEACTIVATE",
        BlockBeaconPowerSelect => "BLOCK_BEACON_POWER_SELECT",
        BlockBellUse => "BLOCK_BELL_USE",
        BlockBrewingStandBrew => "BLOCK_BREWING_STAND_BREW",
        BlockChestClose => "BLOCK_CHEST_CLOSE",
        BlockChestOpen => "BLOCK_CHEST_OPEN",
        BlockConduitActivate => "BLOCK_CONDUIT_ACTIVATE",
        BlockConduitDeactivate => "BLOCK_CONDUIT_DEACTIVATE",
        BlockEndPortalSpawn => "BLOCK_END_PORTAL_SPAWN",
        BlockEnchantmentTableUse => "BLOCK_ENCHANTMENT_TABLE_USE",
        BlockFireExtinguish => "BLOCK_FIRE_EXTINGUISH",
        BlockLavaExtinguish => "BLOCK_LAVA_EXTINGUISH",
        BlockLeverClick => "BLOCK_LEVER_CLICK",
        BlockNoteBlockBanjo => "BLOCK_NOTE_BLOCK_BANJO",
        BlockNoteBlockBass => "BLOCK_NOTE_BLOCK_BASS",
        BlockNoteBlockBell => "BLOCK_NOTE_BLOCK_BELL",
        BlockNoteBlockBit => "BLOCK_NOTE_BLOCK_BIT",
        BlockNoteBlockChime => "BLOCK_NOTE_BLOCK_CHIME",
        BlockNoteBlockFlute => "BLOCK_NOTE_BLOCK_FLUTE",
        BlockNoteBlockGuitar => "BLOCK_NOTE_BLOCK_GUITAR",
        BlockNoteBlockHarp => "BLOCK_NOTE_BLOCK_HARP",
        BlockNoteBlockPling => "BLOCK_NOTE_BLOCK_PLING",
        BlockNoteBlockXylophone => "BLOCK_NOTE_BLOCK_XYLOPHONE",
        BlockPortalTravel => "BLOCK_PORTAL_TRAVEL",
        BlockPortalTrigger => "BLOCK_PORTAL_TRIGGER",
        BlockRespawnAnchorCharge => "BLOCK_RESPAWN_ANCHOR_CHARGE",
        BlockRespawnAnchorDeplete => "BLOCK_RESPAWN_ANCHOR_DEPLETE",
        BlockShulkerBoxOpen => "BLOCK_SHULKER_BOX_OPEN",
        BlockStoneButtonClickOn => "BLOCK_STONE_BUTTON_CLICK_ON",
        EntityArrowHitPlayer => "ENTITY_ARROW_HIT_PLAYER",
        EntityBatTakeoff => "ENTITY_BAT_TAKEOFF",
        EntityBlazeShoot => "ENTITY_BLAZE_SHOOT",
        EntityCatPurr => "ENTITY_CAT_PURR",
        EntityChickenEgg => "ENTITY_CHICKEN_EGG",
        EntityEnderDragonFlap => "ENTITY_ENDER_DRAGON_FLAP",
        EntityEnderDragonGrowl => "ENTITY_ENDER_DRAGON_GROWL",
        EntityEnderEyeDeath => "ENTITY_ENDER_EYE_DEATH",
        EntityEndermanTeleport => "ENTITY_ENDERMAN_TELEPORT",
        EntityExperienceOrbPickup => "ENTITY_EXPERIENCE_ORB_PICKUP",
        EntityFireworkRocketBlast => "ENTITY_FIREWORK_ROCKET_BLAST",
        EntityFireworkRocketLaunch => "ENTITY_FIREWORK_ROCKET_LAUNCH",
        EntityFireworkRocketTwinkle => "ENTITY_FIREWORK_ROCKET_TWINKLE",
        EntityGenericExtinguishFire => "ENTITY_GENERIC_EXTINGUISH_FIRE",
        EntityIllusionerCastSpell => "ENTITY_ILLUSIONER_CAST_SPELL",
        EntityItemPickup => "ENTITY_ITEM_PICKUP",
        EntityParrotFly => "ENTITY_PARROT_FLY",
        EntityPhantomFlap => "ENTITY_PHANTOM_FLAP",
        EntityPlayerLevelup => "ENTITY_PLAYER_LEVELUP",
        EntityShulkerShoot => "ENTITY_SHULKER_SHOOT",
        EntityShulkerTeleport => "ENTITY_SHULKER_TELEPORT",
        EntityVillagerNo => "ENTITY_VILLAGER_NO",
        EntityVillagerTrade => "ENTITY_VILLAGER_TRADE",
        EntityVillagerYes => "ENTITY_VILLAGER_YES",
        EntityWitherSpawn => "ENTITY_WITHER_SPAWN",
        ItemArmorEquipElytra => "ITEM_ARMOR_EQUIP_ELYTRA",
        ItemElytraFlying => "ITEM_ELYTRA_FLYING",
        ItemFirechargeUse => "ITEM_FIRECHARGE_USE",
        ItemTotemUse => "ITEM_TOTEM_USE",
        ItemTridentRiptide1 => "ITEM_TRIDENT_RIPTIDE_1",
        ItemTridentThunder => "ITEM_TRIDENT_THUNDER",
        UiButtonClick => "UI_BUTTON_CLICK",
        UiToastChallengeComplete => "UI_TOAST_CHALLENGE_COMPLETE",
        UiToastIn => "UI_TOAST_IN",
        UiToastOut => "UI_TOAST_OUT",
    }
}

config_enum! {
    /// Mixer channel a sound is played on.
    pub enum SoundCategory: "sound category" {
        Master => "MASTER",
        Music => "MUSIC",
        Records => "RECORDS",
        Weather => "WEATHER",
        Blocks => "BLOCKS",
        Hostile => "HOSTILE",
        Neutral => "NEUTRAL",
        Players => "PLAYERS",
        Ambient => "AMBIENT",
        Voice => "VOICE",
    }
}

impl Default for SoundCategory {
    fn default() -> Self {
        SoundCategory::Players
    }
}
