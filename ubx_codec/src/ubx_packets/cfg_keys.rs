use crate::value::TypeTag;

macro_rules! cfg_keys {
    ($($name:ident = $key:literal, $tag:ident $(($n:literal))?;)*) => {
        /// Configuration items, `(name, key, type)`
        pub(crate) const CFG_KEYS: &[(&str, u32, TypeTag)] = &[
            $((stringify!($name), $key, TypeTag::$tag $(($n))?),)*
        ];
    };
}

/// Message output rates exist once per port. The key of the I2C port is
/// the base, UART1, UART2, USB and SPI follow it in that order.
macro_rules! msgout_keys {
    ($($name:ident = $base:literal;)*) => {
        pub(crate) const CFG_MSGOUT: &[[(&str, u32, TypeTag); 5]] = &[
            $([
                (concat!("CFG_MSGOUT_", stringify!($name), "_I2C"), $base, TypeTag::U1),
                (concat!("CFG_MSGOUT_", stringify!($name), "_UART1"), $base + 1, TypeTag::U1),
                (concat!("CFG_MSGOUT_", stringify!($name), "_UART2"), $base + 2, TypeTag::U1),
                (concat!("CFG_MSGOUT_", stringify!($name), "_USB"), $base + 3, TypeTag::U1),
                (concat!("CFG_MSGOUT_", stringify!($name), "_SPI"), $base + 4, TypeTag::U1),
            ],)*
        ];
    };
}

cfg_keys! {
    // CFG-I2C
    CFG_I2C_ADDRESS = 0x20510001, U1;
    CFG_I2C_EXTENDEDTIMEOUT = 0x10510002, L;
    CFG_I2C_ENABLED = 0x10510003, L;
    CFG_I2CINPROT_UBX = 0x10710001, L;
    CFG_I2CINPROT_NMEA = 0x10710002, L;
    CFG_I2CINPROT_RTCM3X = 0x10710004, L;
    CFG_I2COUTPROT_UBX = 0x10720001, L;
    CFG_I2COUTPROT_NMEA = 0x10720002, L;
    CFG_I2COUTPROT_RTCM3X = 0x10720004, L;
    // CFG-INFMSG
    CFG_INFMSG_UBX_I2C = 0x20920001, X(1);
    CFG_INFMSG_UBX_UART1 = 0x20920002, X(1);
    CFG_INFMSG_UBX_UART2 = 0x20920003, X(1);
    CFG_INFMSG_UBX_USB = 0x20920004, X(1);
    CFG_INFMSG_UBX_SPI = 0x20920005, X(1);
    CFG_INFMSG_NMEA_I2C = 0x20920006, X(1);
    CFG_INFMSG_NMEA_UART1 = 0x20920007, X(1);
    CFG_INFMSG_NMEA_UART2 = 0x20920008, X(1);
    CFG_INFMSG_NMEA_USB = 0x20920009, X(1);
    CFG_INFMSG_NMEA_SPI = 0x2092000a, X(1);
    // CFG-NAVSPG
    CFG_NAVSPG_FIXMODE = 0x20110011, E1;
    CFG_NAVSPG_INIFIX3D = 0x10110013, L;
    CFG_NAVSPG_UTCSTANDARD = 0x2011001c, E1;
    CFG_NAVSPG_DYNMODEL = 0x20110021, E1;
    CFG_NAVSPG_INFIL_MINELEV = 0x201100a4, I1;
    // CFG-NMEA
    CFG_NMEA_PROTVER = 0x20930001, E1;
    CFG_NMEA_HIGHPREC = 0x10930006, L;
    CFG_NMEA_MAINTALKERID = 0x20930031, E1;
    // CFG-RATE
    CFG_RATE_MEAS = 0x30210001, U2;
    CFG_RATE_NAV = 0x30210002, U2;
    CFG_RATE_TIMEREF = 0x20210003, E1;
    // CFG-SIGNAL
    CFG_SIGNAL_GPS_L1CA_ENA = 0x10310001, L;
    CFG_SIGNAL_GPS_L2C_ENA = 0x10310003, L;
    CFG_SIGNAL_GAL_E1_ENA = 0x10310007, L;
    CFG_SIGNAL_GAL_E5B_ENA = 0x1031000a, L;
    CFG_SIGNAL_BDS_B1_ENA = 0x1031000d, L;
    CFG_SIGNAL_BDS_B2_ENA = 0x1031000e, L;
    CFG_SIGNAL_QZSS_L1CA_ENA = 0x10310012, L;
    CFG_SIGNAL_QZSS_L2C_ENA = 0x10310015, L;
    CFG_SIGNAL_GLO_L1_ENA = 0x10310018, L;
    CFG_SIGNAL_GLO_L2_ENA = 0x1031001a, L;
    CFG_SIGNAL_GPS_ENA = 0x1031001f, L;
    CFG_SIGNAL_GAL_ENA = 0x10310021, L;
    CFG_SIGNAL_BDS_ENA = 0x10310022, L;
    CFG_SIGNAL_QZSS_ENA = 0x10310024, L;
    CFG_SIGNAL_GLO_ENA = 0x10310025, L;
    // CFG-SPI
    CFG_SPI_MAXFF = 0x20640001, U1;
    CFG_SPI_CPOLARITY = 0x10640002, L;
    CFG_SPI_CPHASE = 0x10640003, L;
    CFG_SPI_EXTENDEDTIMEOUT = 0x10640005, L;
    CFG_SPI_ENABLED = 0x10640006, L;
    CFG_SPIINPROT_UBX = 0x10790001, L;
    CFG_SPIINPROT_NMEA = 0x10790002, L;
    CFG_SPIINPROT_RTCM3X = 0x10790004, L;
    CFG_SPIOUTPROT_UBX = 0x107a0001, L;
    CFG_SPIOUTPROT_NMEA = 0x107a0002, L;
    CFG_SPIOUTPROT_RTCM3X = 0x107a0004, L;
    // CFG-TP
    CFG_TP_ANT_CABLEDELAY = 0x30050001, I2;
    CFG_TP_PERIOD_TP1 = 0x40050002, U4;
    CFG_TP_PERIOD_LOCK_TP1 = 0x40050003, U4;
    CFG_TP_LEN_TP1 = 0x40050004, U4;
    CFG_TP_LEN_LOCK_TP1 = 0x40050005, U4;
    CFG_TP_TP1_ENA = 0x10050007, L;
    CFG_TP_SYNC_GNSS_TP1 = 0x10050008, L;
    CFG_TP_USE_LOCKED_TP1 = 0x10050009, L;
    CFG_TP_ALIGN_TO_TOW_TP1 = 0x1005000a, L;
    CFG_TP_POL_TP1 = 0x1005000b, L;
    CFG_TP_TIMEGRID_TP1 = 0x2005000c, E1;
    CFG_TP_PULSE_DEF = 0x20050023, E1;
    CFG_TP_FREQ_TP1 = 0x40050024, U4;
    CFG_TP_FREQ_LOCK_TP1 = 0x40050025, U4;
    CFG_TP_PULSE_LENGTH_DEF = 0x20050030, E1;
    // CFG-UART1
    CFG_UART1_BAUDRATE = 0x40520001, U4;
    CFG_UART1_STOPBITS = 0x20520002, E1;
    CFG_UART1_DATABITS = 0x20520003, E1;
    CFG_UART1_PARITY = 0x20520004, E1;
    CFG_UART1_ENABLED = 0x10520005, L;
    CFG_UART1INPROT_UBX = 0x10730001, L;
    CFG_UART1INPROT_NMEA = 0x10730002, L;
    CFG_UART1INPROT_RTCM3X = 0x10730004, L;
    CFG_UART1OUTPROT_UBX = 0x10740001, L;
    CFG_UART1OUTPROT_NMEA = 0x10740002, L;
    CFG_UART1OUTPROT_RTCM3X = 0x10740004, L;
    // CFG-UART2
    CFG_UART2_BAUDRATE = 0x40530001, U4;
    CFG_UART2_STOPBITS = 0x20530002, E1;
    CFG_UART2_DATABITS = 0x20530003, E1;
    CFG_UART2_PARITY = 0x20530004, E1;
    CFG_UART2_ENABLED = 0x10530005, L;
    CFG_UART2_REMAP = 0x10530006, L;
    CFG_UART2INPROT_UBX = 0x10750001, L;
    CFG_UART2INPROT_NMEA = 0x10750002, L;
    CFG_UART2INPROT_RTCM3X = 0x10750004, L;
    CFG_UART2OUTPROT_UBX = 0x10760001, L;
    CFG_UART2OUTPROT_NMEA = 0x10760002, L;
    CFG_UART2OUTPROT_RTCM3X = 0x10760004, L;
    // CFG-USB
    CFG_USB_ENABLED = 0x10650001, L;
    CFG_USB_SELFPOW = 0x10650002, L;
    CFG_USB_VENDOR_ID = 0x3065000a, U2;
    CFG_USB_PRODUCT_ID = 0x3065000b, U2;
    CFG_USB_POWER = 0x3065000c, U2;
    CFG_USB_VENDOR_STR0 = 0x5065000d, X(8);
    CFG_USB_VENDOR_STR1 = 0x5065000e, X(8);
    CFG_USB_VENDOR_STR2 = 0x5065000f, X(8);
    CFG_USB_VENDOR_STR3 = 0x50650010, X(8);
    CFG_USB_PRODUCT_STR0 = 0x50650011, X(8);
    CFG_USB_PRODUCT_STR1 = 0x50650012, X(8);
    CFG_USB_PRODUCT_STR2 = 0x50650013, X(8);
    CFG_USB_PRODUCT_STR3 = 0x50650014, X(8);
    CFG_USB_SERIAL_NO_STR0 = 0x50650015, X(8);
    CFG_USB_SERIAL_NO_STR1 = 0x50650016, X(8);
    CFG_USB_SERIAL_NO_STR2 = 0x50650017, X(8);
    CFG_USB_SERIAL_NO_STR3 = 0x50650018, X(8);
    CFG_USBINPROT_UBX = 0x10770001, L;
    CFG_USBINPROT_NMEA = 0x10770002, L;
    CFG_USBINPROT_RTCM3X = 0x10770004, L;
    CFG_USBOUTPROT_UBX = 0x10780001, L;
    CFG_USBOUTPROT_NMEA = 0x10780002, L;
    CFG_USBOUTPROT_RTCM3X = 0x10780004, L;
}

msgout_keys! {
    NMEA_ID_DTM = 0x209100a6;
    NMEA_ID_GBS = 0x209100dd;
    NMEA_ID_GGA = 0x209100ba;
    NMEA_ID_GLL = 0x209100c9;
    NMEA_ID_GNS = 0x209100b5;
    NMEA_ID_GRS = 0x209100ce;
    NMEA_ID_GSA = 0x209100bf;
    NMEA_ID_GST = 0x209100d3;
    NMEA_ID_GSV = 0x209100c4;
    NMEA_ID_RMC = 0x209100ab;
    NMEA_ID_VLW = 0x209100e7;
    NMEA_ID_VTG = 0x209100b0;
    NMEA_ID_ZDA = 0x209100d8;
    PUBX_ID_POLYP = 0x209100ec;
    PUBX_ID_POLYS = 0x209100f1;
    PUBX_ID_POLYT = 0x209100f6;
    RTCM_3X_TYPE1005 = 0x209102bd;
    RTCM_3X_TYPE1074 = 0x2091035e;
    RTCM_3X_TYPE1077 = 0x209102cc;
    RTCM_3X_TYPE1084 = 0x20910363;
    RTCM_3X_TYPE1087 = 0x209102d1;
    RTCM_3X_TYPE1094 = 0x20910368;
    RTCM_3X_TYPE1097 = 0x20910318;
    RTCM_3X_TYPE1124 = 0x2091036d;
    RTCM_3X_TYPE1127 = 0x209102d6;
    RTCM_3X_TYPE1230 = 0x20910303;
    UBX_LOG_INFO = 0x20910259;
    UBX_MON_COMMS = 0x2091034f;
    UBX_MON_HW2 = 0x209101b9;
    UBX_MON_HW3 = 0x20910354;
    UBX_MON_HW = 0x209101b4;
    UBX_MON_IO = 0x209101a5;
    UBX_MON_MSGPP = 0x20910196;
    UBX_MON_RF = 0x20910359;
    UBX_MON_RXBUF = 0x209101a0;
    UBX_MON_RXR = 0x20910187;
    UBX_MON_TXBUF = 0x2091019b;
    UBX_NAV_CLOCK = 0x20910065;
    UBX_NAV_DOP = 0x20910038;
    UBX_NAV_EOE = 0x2091015f;
    UBX_NAV_GEOFENCE = 0x209100a1;
    UBX_NAV_HPPOSECEF = 0x2091002e;
    UBX_NAV_HPPOSLLH = 0x20910033;
    UBX_NAV_ODO = 0x2091007e;
    UBX_NAV_ORB = 0x20910010;
    UBX_NAV_POSECEF = 0x20910024;
    UBX_NAV_POSLLH = 0x20910029;
    UBX_NAV_PVT = 0x20910006;
    UBX_NAV_RELPOSNED = 0x2091008d;
    UBX_NAV_SAT = 0x20910015;
    UBX_NAV_SIG = 0x20910345;
    UBX_NAV_STATUS = 0x2091001a;
    UBX_NAV_SVIN = 0x20910088;
    UBX_NAV_TIMEBDS = 0x20910051;
    UBX_NAV_TIMEGAL = 0x20910056;
    UBX_NAV_TIMEGLO = 0x2091004c;
    UBX_NAV_TIMEGPS = 0x20910047;
    UBX_NAV_TIMELS = 0x20910060;
    UBX_NAV_TIMEUTC = 0x2091005b;
    UBX_NAV_VELECEF = 0x2091003d;
    UBX_NAV_VELNED = 0x20910042;
    UBX_RXM_MEASX = 0x20910204;
    UBX_RXM_RAWX = 0x209102a4;
    UBX_RXM_RLM = 0x2091025e;
    UBX_RXM_RTCM = 0x20910268;
    UBX_RXM_SFRBX = 0x20910231;
    UBX_TIM_TM2 = 0x20910178;
    UBX_TIM_TP = 0x2091017d;
    UBX_TIM_VRFY = 0x20910092;
}
