//! Particle kinds understood by the renderer.

use super::config_enum;

config_enum! {
    /// A particle the presentation layer can spawn.
    pub enum Particle: "particle" {
        ExplosionNormal => "EXPLOSION_NORMAL",
        ExplosionLarge => "EXPLOSION_LARGE",
        ExplosionHuge => "EXPLOSION_HUGE",
        FireworksSpark => "FIREWORKS_SPARK",
        WaterBubble => "WATER_BUBBLE",
        WaterSplash => "WATER_SPLASH",
        WaterWake => "WATER_WAKE",
        Suspended => "SUSPENDED",
        SuspendedDepth => "SUSPENDED_DEPTH",
        Crit => "CRIT",
        CritMagic => "CRIT_MAGIC",
        SmokeNormal => "SMOKE_NORMAL",
        SmokeLarge => "SMOKE_LARGE",
        Spell => "SPELL",
        SpellInstant => "SPELL_INSTANT",
        SpellMob => "SPELL_MOB",
        SpellMobAmbient => "SPELL_MOB_AMBIENT",
        SpellWitch => "SPELL_WITCH",
        DripWater => "DRIP_WATER",
        DripLava => "DRIP_LAVA",
        VillagerAngry => "VILLAGER_ANGRY",
        VillagerHappy => "VILLAGER_HAPPY",
        TownAura => "TOWN_AURA",
        Note => "NOTE",
        Portal => "PORTAL",
        EnchantmentTable => "ENCHANTMENT_TABLE",
        Flame => "FLAME",
        Lava => "LAVA",
        Cloud => "CLOUD",
        Snowball => "SNOWBALL",
        SnowShovel => "SNOW_SHOVEL",
        Slime => "SLIME",
        Heart => "HEART",
        WaterDrop => "WATER_DROP",
        MobAppearance => "MOB_APPEARANCE",
        DragonBreath => "DRAGON_BREATH",
        EndRod => "END_ROD",
        DamageIndicator => "DAMAGE_INDICATOR",
        SweepAttack => "SWEEP_ATTACK",
        Totem => "TOTEM",
        Spit => "SPIT",
        SquidInk => "SQUID_INK",
        BubblePop => "BUBBLE_POP",
        CurrentDown => "CURRENT_DOWN",
        BubbleColumnUp => "BUBBLE_COLUMN_UP",
        Nautilus => "NAUTILUS",
        Dolphin => "DOLPHIN",
        Sneeze => "SNEEZE",
        CampfireCosySmoke => "CAMPFIRE_COSY_SMOKE",
        CampfireSignalSmoke => "CAMPFIRE_SIGNAL_SMOKE",
        Composter => "COMPOSTER",
        Flash => "FLASH",
        FallingLava => "FALLING_LAVA",
        LandingLava => "LANDING_LAVA",
        FallingWater => "FALLING_WATER",
        DrippingHoney => "DRIPPING_HONEY",
        FallingHoney => "FALLING_HONEY",
        LandingHoney => "LANDING_HONEY",
        FallingNectar => "FALLING_NECTAR",
        SoulFireFlame => "SOUL_FIRE_FLAME",
        Ash => "ASH",
        CrimsonSpore => "CRIMSON_SPORE",
        WarpedSpore => "WARPED_SPORE",
        Soul => "SOUL",
        DrippingObsidianTear => "DRIPPING_OBSIDIAN_TEAR",
        FallingObsidianTear => "FALLING_OBSIDIAN_TEAR",
        LandingObsidianTear => "LANDING_OBSIDIAN_TEAR",
        ReversePortal => "REVERSE_PORTAL",
        WhiteAsh => "WHITE_ASH",
    }
}
